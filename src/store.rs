use tokio::sync::watch;

/// Observable value with a single writer path.
///
/// Every update swaps in a whole new value; readers either take a cloned
/// snapshot or subscribe to be woken when it changes.
#[derive(Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Reads through the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Replaces the value with `f(current)` and returns what `f` produced
    /// alongside it. Runs under the channel lock, so concurrent updates
    /// never interleave.
    pub fn update<R>(&self, f: impl FnOnce(&T) -> (T, R)) -> R {
        let mut out = None;
        self.tx.send_modify(|cur| {
            let (next, r) = f(cur);
            *cur = next;
            out = Some(r);
        });
        match out {
            Some(r) => r,
            None => unreachable!("send_modify always runs the closure"),
        }
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
