pub(crate) mod add_entry;
pub(crate) mod dashboard;
pub(crate) mod entries;
