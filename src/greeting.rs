use dioxus::prelude::*;

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning!"
    } else if hour < 17 {
        "Good afternoon!"
    } else {
        "Good evening!"
    }
}

#[cfg(target_arch = "wasm32")]
fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_hour() -> u32 {
    12
}

#[component]
pub fn Greeting() -> Element {
    let text = greeting_for_hour(local_hour());
    rsx! {
        p { id: "greeting", class: "greeting", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn morning_runs_until_noon() {
        assert_eq!(greeting_for_hour(0), "Good morning!");
        assert_eq!(greeting_for_hour(7), "Good morning!");
        assert_eq!(greeting_for_hour(11), "Good morning!");
    }

    #[test]
    fn afternoon_runs_until_five() {
        assert_eq!(greeting_for_hour(12), "Good afternoon!");
        assert_eq!(greeting_for_hour(16), "Good afternoon!");
    }

    #[test]
    fn evening_covers_the_rest() {
        assert_eq!(greeting_for_hour(17), "Good evening!");
        assert_eq!(greeting_for_hour(23), "Good evening!");
    }
}
