//! Resolution-stack guard
//!
//! Tracks which `(container, key)` pairs are being created on the current
//! thread. Resolution is a plain call chain, so a pair showing up twice means
//! the definitions depend on themselves.

use std::cell::RefCell;

use ioc_domain::error::{Error, Result};

thread_local! {
    static RESOLUTION_STACK: RefCell<Vec<(u64, String)>> = const { RefCell::new(Vec::new()) };
}

/// Marks one element as under construction until dropped
#[derive(Debug)]
pub struct ResolutionGuard {
    depth: usize,
}

impl ResolutionGuard {
    /// Push `key` of `container_id`, or fail if it is already being created
    pub fn enter(container_id: u64, key: &str) -> Result<Self> {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack
                .iter()
                .any(|(id, pending)| *id == container_id && pending == key)
            {
                let mut chain: Vec<String> =
                    stack.iter().map(|(_, pending)| pending.clone()).collect();
                chain.push(key.to_string());
                return Err(Error::cyclic_dependency(key, chain));
            }
            stack.push((container_id, key.to_string()));
            Ok(Self { depth: stack.len() })
        })
    }

    /// Number of elements under construction on this thread
    pub fn current_depth() -> usize {
        RESOLUTION_STACK.with(|stack| stack.borrow().len())
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| stack.borrow_mut().truncate(self.depth - 1));
    }
}
