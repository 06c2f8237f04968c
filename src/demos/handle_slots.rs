//! Handle slots vs referents, and deep copies.
//!
//! `ma` and `mb` live in two different variable slots, yet both denote the
//! same map. A deep copy is the opposite case: equal contents, a separate
//! instance, and later inserts stay on their own side.

use std::ptr;

use super::{render_lookup, Demo, Transcript};
use crate::config::DemoKind;
use crate::map::SharedMap;

/// Handle slot / deep copy demo.
#[derive(Debug, Clone)]
pub struct HandleSlotsDemo {
    absent_sentinel: String,
}

impl Default for HandleSlotsDemo {
    fn default() -> Self {
        Self::new("<absent>")
    }
}

impl HandleSlotsDemo {
    /// Create the demo; `absent_sentinel` is printed for missing keys.
    #[must_use]
    pub fn new(absent_sentinel: impl Into<String>) -> Self {
        Self {
            absent_sentinel: absent_sentinel.into(),
        }
    }
}

impl Demo for HandleSlotsDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::HandleSlots
    }

    fn run(&self, out: &mut Transcript) {
        let ma = SharedMap::from_pairs([("a", "b"), ("b", "c")]);
        let mb = ma.alias();

        let same_slot = ptr::eq(&ma, &mb);
        let same_map = ma.identity_eq(&mb);
        out.line(format!("slot(ma) == slot(mb) = {same_slot}"));
        out.line(format!("map(ma) == map(mb) = {same_map}"));
        out.line(format!("handles to map(ma) = {}", ma.alias_count()));

        let mc = ma.deep_copy();
        let value_equal = ma.value_eq(&mc);
        let identity_equal = ma.identity_eq(&mc);
        out.line(format!("equal = {value_equal}"));
        out.line(format!("== = {identity_equal}"));
        out.record_equality("ma vs copy", value_equal, identity_equal);

        out.line("------ after ------");
        out.blank();

        log::debug!("inserting into the deep copy only");
        mc.insert("d", "e");
        let in_original = ma.get("d");
        let in_copy = mc.get("d");
        out.line(format!(
            "ma['d']={}, mc['d']={}",
            render_lookup(in_original.as_deref(), &self.absent_sentinel),
            render_lookup(in_copy.as_deref(), &self.absent_sentinel),
        ));

        let value_equal = ma.value_eq(&mc);
        let identity_equal = ma.identity_eq(&mc);
        out.line(format!("equal = {value_equal}"));
        out.line(format!("== = {identity_equal}"));
        out.record_equality("ma vs copy", value_equal, identity_equal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_slots_output() {
        let mut t = Transcript::new();
        HandleSlotsDemo::default().run(&mut t);
        assert_eq!(
            t.output(),
            "slot(ma) == slot(mb) = false\n\
             map(ma) == map(mb) = true\n\
             handles to map(ma) = 2\n\
             equal = true\n\
             == = false\n\
             ------ after ------\n\
             \n\
             ma['d']=<absent>, mc['d']=e\n\
             equal = false\n\
             == = false\n"
        );
    }

    #[test]
    fn test_handle_slots_checks() {
        let mut t = Transcript::new();
        HandleSlotsDemo::default().run(&mut t);
        let flags: Vec<(bool, bool)> = t
            .checks()
            .iter()
            .map(|c| (c.value_equal, c.identity_equal))
            .collect();
        assert_eq!(flags, [(true, false), (false, false)]);
    }
}
