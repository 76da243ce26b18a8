use std::future::Future;

use tokio::task::JoinHandle;

/// Background tasks owned by one controller, aborted together on teardown.
#[derive(Debug, Default)]
pub(crate) struct TaskGroup {
    handles: Vec<JoinHandle<()>>,
}

impl TaskGroup {
    pub(crate) fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(future));
    }

    pub(crate) fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

/// At most one task at a time; spawning replaces (and aborts) the previous one.
#[derive(Debug, Default)]
pub(crate) struct TaskSlot {
    handle: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub(crate) fn replace<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.abort();
        self.handle = Some(tokio::spawn(future));
    }

    /// Track a task without aborting the one it supersedes.
    pub(crate) fn supersede<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle = Some(tokio::spawn(future));
    }

    pub(crate) fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
