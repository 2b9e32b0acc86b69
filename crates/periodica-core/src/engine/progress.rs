/// Events emitted by long-running workflows such as catalog loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
    /// A non-fatal data problem, such as two compounds sharing a composition.
    Warning(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// A reporter without a callback silently drops every event, so library code
/// can report unconditionally.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_forwards_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        reporter.report(Progress::PhaseStart { name: "Elements" });
        reporter.report(Progress::Message("read 118 elements".to_string()));
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                Progress::PhaseStart { name: "Elements" },
                Progress::Message("read 118 elements".to_string()),
                Progress::PhaseFinish,
            ]
        );
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskStart { total_steps: 3 });
        reporter.report(Progress::TaskFinish);
    }
}
