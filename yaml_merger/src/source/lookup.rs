//! Where source names are looked up.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::hash::BuildHasher;

/// Maps a source name to its raw value.
pub trait SourceLookup {
    /// Returns the value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<OsString>;
}

/// Looks source names up in the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl SourceLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl<S: BuildHasher> SourceLookup for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl SourceLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl<T: SourceLookup + ?Sized> SourceLookup for &T {
    fn lookup(&self, name: &str) -> Option<OsString> {
        (**self).lookup(name)
    }
}
