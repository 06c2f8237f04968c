//! Shared map: mutation through an alias, then map equality.
//!
//! `ma` and `mb` are two names for one map, so an insert through `mb` shows
//! up when reading `ma`. `mc` is built separately with the same pairs: it
//! compares equal by value but is a different instance.

use super::{render_lookup, Demo, Transcript};
use crate::config::DemoKind;
use crate::map::SharedMap;

/// Aliased map demo.
#[derive(Debug, Clone)]
pub struct StringMapDemo {
    absent_sentinel: String,
}

impl Default for StringMapDemo {
    fn default() -> Self {
        Self::new("<absent>")
    }
}

impl StringMapDemo {
    /// Create the demo; `absent_sentinel` is printed for missing keys.
    #[must_use]
    pub fn new(absent_sentinel: impl Into<String>) -> Self {
        Self {
            absent_sentinel: absent_sentinel.into(),
        }
    }

    fn print_lookups(&self, out: &mut Transcript, name: &str, map: &SharedMap) {
        let a = map.get("a");
        let b = map.get("b");
        out.line(format!(
            "{name}['a']={}, {name}['b']={}",
            render_lookup(a.as_deref(), &self.absent_sentinel),
            render_lookup(b.as_deref(), &self.absent_sentinel),
        ));
    }
}

impl Demo for StringMapDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::StringMap
    }

    fn run(&self, out: &mut Transcript) {
        let ma = SharedMap::new();
        ma.insert("a", "b");
        let mb = ma.alias();
        self.print_lookups(out, "ma", &ma);
        self.print_lookups(out, "mb", &mb);

        out.line("------ after ------");
        out.blank();

        log::debug!("inserting through alias mb");
        mb.insert("b", "c");
        self.print_lookups(out, "ma", &ma);
        self.print_lookups(out, "mb", &mb);

        out.blank();
        out.blank();

        let mc = SharedMap::new();
        mc.insert("a", "b");
        mc.insert("b", "c");

        let (value_mb, value_mc) = (ma.value_eq(&mb), ma.value_eq(&mc));
        let (ident_mb, ident_mc) = (ma.identity_eq(&mb), ma.identity_eq(&mc));
        out.line(format!("equal = {value_mb}, {value_mc}"));
        out.line(format!("== = {ident_mb}, {ident_mc}"));
        out.record_equality("ma vs mb", value_mb, ident_mb);
        out.record_equality("ma vs mc", value_mc, ident_mc);
    }
}
