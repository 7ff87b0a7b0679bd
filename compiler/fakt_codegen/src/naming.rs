//! Member-name derivation (spec §4.6.1): behavior field, configurator,
//! and call-count handle names are a fixed transformation of a "slot"
//! name. For a function member the slot is its own name; for a property
//! getter the slot is the property name; for a property setter the slot
//! is `"set" + Capitalized(property name)`.

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The setter slot name for a property, e.g. `"name"` → `"setName"`.
pub fn setter_slot(property_name: &str) -> String {
    format!("set{}", capitalize_first(property_name))
}

pub fn behavior_field_name(slot: &str) -> String {
    format!("{slot}Behavior")
}

pub fn configure_name(slot: &str) -> String {
    format!("configure{}", capitalize_first(slot))
}

pub fn call_count_name(slot: &str) -> String {
    format!("{slot}CallCount")
}

fn call_count_state_field(slot: &str) -> String {
    format!("{slot}CallCountState")
}

/// The three derived names a slot needs in the implementation class.
pub struct SlotNames {
    pub behavior_field: String,
    pub configure: String,
    pub call_count: String,
    pub call_count_state: String,
}

impl SlotNames {
    pub fn for_slot(slot: &str) -> Self {
        Self {
            behavior_field: behavior_field_name(slot),
            configure: configure_name(slot),
            call_count: call_count_name(slot),
            call_count_state: call_count_state_field(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_names_for_a_function_member() {
        let names = SlotNames::for_slot("getUser");
        assert_eq!(names.behavior_field, "getUserBehavior");
        assert_eq!(names.configure, "configureGetUser");
        assert_eq!(names.call_count, "getUserCallCount");
    }

    #[test]
    fn derives_setter_slot_from_property_name() {
        assert_eq!(setter_slot("name"), "setName");
        let names = SlotNames::for_slot(&setter_slot("name"));
        assert_eq!(names.behavior_field, "setNameBehavior");
        assert_eq!(names.configure, "configureSetName");
        assert_eq!(names.call_count, "setNameCallCount");
    }
}
