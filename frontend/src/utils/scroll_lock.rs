use std::cell::RefCell;
use std::collections::BTreeSet;

/// Components that may lock page scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LockHolder {
    NavMenu,
    ProjectModal,
    InfoModal,
}

/// Page scroll stays locked while any holder still wants it.
#[derive(Clone, Debug, Default)]
pub struct ScrollLocks {
    holders: BTreeSet<LockHolder>,
}

impl ScrollLocks {
    /// Records `holder`'s wish and returns whether the page should be locked.
    pub fn set(&mut self, holder: LockHolder, locked: bool) -> bool {
        if locked {
            self.holders.insert(holder);
        } else {
            self.holders.remove(&holder);
        }
        self.is_locked()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }
}

thread_local! {
    static SCROLL_LOCKS: RefCell<ScrollLocks> = RefCell::new(ScrollLocks::default());
}

/// Updates `holder`'s lock and projects the combined result onto the body.
pub fn set_scroll_locked(holder: LockHolder, locked: bool) {
    let page_locked = SCROLL_LOCKS.with(|locks| locks.borrow_mut().set(holder, locked));
    super::dom::set_body_overflow_hidden(page_locked);
}
