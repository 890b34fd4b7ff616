/// Panic message used when a lock is found to be poisoned.
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock";

/// Panic message used when a loan guard no longer holds its instance.
pub(crate) const ERR_LOAN_CLOSED: &str = "loan guard accessed after its instance was taken";
