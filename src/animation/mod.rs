pub(crate) mod blend;
