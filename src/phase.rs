//! Ordered phase sequencing for effect instances.
//!
//! A machine walks its declared phase list strictly in order. Phases with
//! a tick budget advance on their own from [`PhaseMachine::tick`];
//! condition-gated phases (no budget) sit until the owning effect calls
//! [`PhaseMachine::advance`] once its aggregate condition holds. The
//! final phase either loops back to phase 0 or pins forever, depending on
//! the display-once flag handed in at construction.

#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec<P> {
    pub phase: P,
    /// `None` means condition-gated: only an explicit `advance` exits.
    pub budget: Option<u32>,
}

impl<P> PhaseSpec<P> {
    pub fn timed(phase: P, ticks: u32) -> Self {
        Self {
            phase,
            budget: Some(ticks),
        }
    }

    pub fn gated(phase: P) -> Self {
        Self {
            phase,
            budget: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<P> {
    pub from: P,
    pub to: P,
    /// True when the machine wrapped from the final phase back to phase 0.
    pub looped: bool,
}

pub struct PhaseMachine<P> {
    specs: Vec<PhaseSpec<P>>,
    idx: usize,
    ticks: u32,
    display_once: bool,
    pinned: bool,
}

impl<P: Copy + Eq> PhaseMachine<P> {
    /// `specs` must be non-empty.
    pub fn new(specs: Vec<PhaseSpec<P>>, display_once: bool) -> Self {
        assert!(!specs.is_empty(), "phase machine needs at least one phase");
        Self {
            specs,
            idx: 0,
            ticks: 0,
            display_once,
            pinned: false,
        }
    }

    pub fn current(&self) -> P {
        self.specs[self.idx].phase
    }

    pub fn ticks_in_phase(&self) -> u32 {
        self.ticks
    }

    /// True once a display-once run has reached its final phase for good.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn display_once(&self) -> bool {
        self.display_once
    }

    /// Advance the tick counter, exiting the phase when its budget
    /// elapses. Returns the transition taken, if any.
    pub fn tick(&mut self) -> Option<Transition<P>> {
        if self.pinned {
            return None;
        }
        self.ticks += 1;
        match self.specs[self.idx].budget {
            Some(budget) if self.ticks >= budget => self.advance(),
            _ => None,
        }
    }

    /// Force the current phase to exit (condition-gated phases, early
    /// exits). On the final phase this loops or pins per the flag.
    pub fn advance(&mut self) -> Option<Transition<P>> {
        if self.pinned {
            return None;
        }
        let from = self.current();
        if self.idx + 1 < self.specs.len() {
            self.idx += 1;
            self.ticks = 0;
            Some(Transition {
                from,
                to: self.current(),
                looped: false,
            })
        } else if self.display_once {
            self.pinned = true;
            None
        } else {
            self.idx = 0;
            self.ticks = 0;
            Some(Transition {
                from,
                to: self.current(),
                looped: true,
            })
        }
    }

    /// Rewind to the first phase.
    pub fn reset(&mut self) {
        self.idx = 0;
        self.ticks = 0;
        self.pinned = false;
    }
}
