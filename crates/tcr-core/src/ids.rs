use core::fmt;
use core::num::NonZeroU32;

/// Stable identifier of a thermal-interface-material library record.
///
/// Ids start at 1 and are never reused, so `u32` zero is free to act as
/// "no id" on the wire and `Option<TimId>` stays pointer-sized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimId(NonZeroU32);

impl TimId {
    /// The first id handed out by an empty library.
    pub const FIRST: TimId = TimId(NonZeroU32::MIN);

    /// Wrap a raw id; zero is rejected.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id following this one, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Debug for TimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimId({})", self.get())
    }
}

impl fmt::Display for TimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
