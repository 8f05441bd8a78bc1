use serde::{Deserialize, Serialize};

/// Lifecycle of one test case within a run.
///
/// `Pending` and `Running` can still make progress; `Passed`, `Failed`, and
/// `NotRun` are terminal for the current run and must not regress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "content", rename_all = "camelCase")]
pub enum CaseStatus {
    #[default]
    Pending,
    Running,
    /// Case passed; the server may echo the actual output.
    Passed(Option<String>),
    /// Skipped because an earlier case already failed the batch.
    NotRun,
    /// Case failed; always carries the diagnostic/output text.
    Failed(String),
}

/// UI-facing classification derived from a status, decoupled from the wire
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKind {
    Error,
    Success,
    Empty,
    Idle,
    Loading,
}

impl PresentationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Empty => "empty",
            Self::Idle => "idle",
            Self::Loading => "loading",
        }
    }
}

impl CaseStatus {
    /// True once the case will not change again within the current run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Passed(_) | Self::Failed(_) | Self::NotRun)
    }

    /// Fixed status → presentation mapping.
    ///
    /// The match is exhaustive on purpose: a new status variant must not fall
    /// through to a silent default.
    pub fn presentation(&self) -> PresentationKind {
        match self {
            Self::Failed(_) => PresentationKind::Error,
            Self::Passed(_) => PresentationKind::Success,
            Self::NotRun => PresentationKind::Empty,
            Self::Pending => PresentationKind::Idle,
            Self::Running => PresentationKind::Loading,
        }
    }

    /// Output/diagnostic text carried by a terminal status, if any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Passed(content) => content.as_deref(),
            Self::Failed(content) => Some(content),
            Self::Pending | Self::Running | Self::NotRun => None,
        }
    }
}

/// Full snapshot of one run, tagged by run mode.
///
/// Every server update replaces the previous snapshot wholesale; nothing is
/// merged case-by-case on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JobState {
    /// One submission evaluated against an ordered case battery; index order
    /// matches the UI indicator slots.
    Judging { cases: Vec<CaseStatus> },
    /// Single ad-hoc trial with exactly one status.
    Testing { status: CaseStatus },
}

impl JobState {
    /// True iff no case can still make progress.
    ///
    /// This is the sole signal for re-enabling run controls and for choosing
    /// a final summary over an in-progress one.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Judging { cases } => cases.iter().all(CaseStatus::is_terminal),
            Self::Testing { status } => status.is_terminal(),
        }
    }

    /// Number of indicator slots this job occupies.
    pub fn case_count(&self) -> usize {
        match self {
            Self::Judging { cases } => cases.len(),
            Self::Testing { .. } => 1,
        }
    }
}

/// First failed case in index order, with its diagnostic content.
///
/// Meaningful once a `Judging` run is complete; `None` means the run summary
/// is success regardless of any `NotRun` tail.
pub fn first_failure(cases: &[CaseStatus]) -> Option<(usize, &str)> {
    cases
        .iter()
        .enumerate()
        .find_map(|(index, case)| match case {
            CaseStatus::Failed(content) => Some((index, content.as_str())),
            _ => None,
        })
}
