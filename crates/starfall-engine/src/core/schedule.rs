/// Lifecycle of the frame loop.
///
/// The only transition is `Running -> Terminal`. Once terminal, the runner
/// stops asking the host for frames and there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminal,
}

impl LoopState {
    /// Move to the terminal state. Returns true only on the first call.
    pub fn halt(&mut self) -> bool {
        match self {
            LoopState::Running => {
                *self = LoopState::Terminal;
                true
            }
            LoopState::Terminal => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == LoopState::Terminal
    }

    /// Wire encoding for the protocol header.
    pub fn as_f32(self) -> f32 {
        match self {
            LoopState::Running => 0.0,
            LoopState::Terminal => 1.0,
        }
    }
}

/// What the host should do after a tick: request another frame or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Halted,
}

impl FrameStatus {
    pub fn should_reschedule(self) -> bool {
        self == FrameStatus::Continue
    }
}

impl From<LoopState> for FrameStatus {
    fn from(state: LoopState) -> Self {
        match state {
            LoopState::Running => FrameStatus::Continue,
            LoopState::Terminal => FrameStatus::Halted,
        }
    }
}
