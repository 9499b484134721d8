pub(crate) mod balance;
pub(crate) mod budget;
pub(crate) mod feed;
pub(crate) mod insight;
pub(crate) mod quick_add;
