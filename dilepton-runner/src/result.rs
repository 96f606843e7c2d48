//! Per-event selection output.

use serde::{Deserialize, Serialize};

use dilepton_core::selection::{Channel, SelectionResult};

/// Channel selections for one event. A `None` channel selected nothing or was
/// not run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSelection {
    /// Position of the event in the input batch.
    pub event: usize,
    pub emu: Option<SelectionResult>,
    pub ee: Option<SelectionResult>,
    pub mumu: Option<SelectionResult>,
}

impl EventSelection {
    pub fn new(event: usize) -> Self {
        Self {
            event,
            ..Self::default()
        }
    }

    pub fn get(&self, channel: Channel) -> Option<&SelectionResult> {
        match channel {
            Channel::EMu => self.emu.as_ref(),
            Channel::Ee => self.ee.as_ref(),
            Channel::MuMu => self.mumu.as_ref(),
        }
    }

    pub fn set(&mut self, channel: Channel, result: Option<SelectionResult>) {
        match channel {
            Channel::EMu => self.emu = result,
            Channel::Ee => self.ee = result,
            Channel::MuMu => self.mumu = result,
        }
    }

    /// True if no channel selected a pair.
    pub fn is_empty(&self) -> bool {
        self.emu.is_none() && self.ee.is_none() && self.mumu.is_none()
    }

    /// Single best pair across channels.
    ///
    /// Channels are visited in `Channel::ALL` order (eμ, ee, μμ) with the same
    /// "not strictly lower" rule the selector uses, so on equal summed pT the
    /// later channel wins.
    pub fn best(&self) -> Option<(Channel, &SelectionResult)> {
        let mut best: Option<(Channel, &SelectionResult)> = None;
        for ch in Channel::ALL {
            let Some(r) = self.get(ch) else {
                continue;
            };
            match best {
                Some((_, held)) if r.sum_pt < held.sum_pt => {}
                _ => best = Some((ch, r)),
            }
        }
        best
    }
}
