/// Coarse stages of a transform or path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Expansion,
    Projection,
    PathExtraction,
}

impl Stage {
    pub fn description(self) -> &'static str {
        match self {
            Stage::Expansion => "Expanding IBZ samples over the Oh group",
            Stage::Projection => "Projecting onto real-space distances",
            Stage::PathExtraction => "Extracting high-symmetry path",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    StageStart { stage: Stage },
    StageFinish,

    SitesStart { total: u64 },
    SiteDone,
    SitesFinish,

    Note(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// The callback may be invoked from several worker threads at once when the `parallel`
/// feature is enabled.
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
