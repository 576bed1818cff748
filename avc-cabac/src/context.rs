//! Context variables and their initialization (9.3.1.1).

use crate::arithmetic_decoder;
use crate::context_init_table::{INIT_I, INIT_PB, NA};
use crate::error::{ContextError, Result, bail};
use crate::settings::SliceSettings;

/// The number of context variables (ctxIdx 0..=1023).
pub const NUM_CONTEXTS: usize = 1024;

/// The context index shared by `end_of_slice_flag` and the I_PCM bin of `mb_type`.
pub const CTX_IDX_TERMINATE: u16 = 276;

/// The probability model of a single context: a state index and the value of the most
/// probable symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContextVariable {
    pub(crate) p_state_idx: u8,
    pub(crate) val_mps: u8,
}

impl ContextVariable {
    /// Create the context variable for `ctx_idx` at the start of a slice.
    ///
    /// The result only depends on `ctx_idx` and the slice type, `cabac_init_idc` and
    /// SliceQPY of `settings`.
    pub fn new(ctx_idx: u16, settings: &SliceSettings) -> Result<Self> {
        if ctx_idx == CTX_IDX_TERMINATE {
            // "the variables pStateIdx and valMPS are initialized to 63 and 0".
            return Ok(Self::from_state(63, 0));
        }

        let (table, cabac_init_idc) = if settings.slice_type.is_intra() {
            (&INIT_I, None)
        } else {
            match INIT_PB.get(settings.cabac_init_idc as usize) {
                Some(table) => (table, Some(settings.cabac_init_idc)),
                None => bail!(ContextError::InvalidInitializationEntry {
                    ctx_idx,
                    cabac_init_idc: Some(settings.cabac_init_idc),
                }),
            }
        };

        match table.get(ctx_idx as usize) {
            Some(&(m, n)) if (m, n) != NA => Ok(Self::from_init_value(m, n, settings.slice_qp_y)),
            _ => {
                lwarn!(
                    "no initialization values for ctxIdx {} (cabac_init_idc {:?})",
                    ctx_idx,
                    cabac_init_idc
                );

                bail!(ContextError::InvalidInitializationEntry {
                    ctx_idx,
                    cabac_init_idc,
                })
            }
        }
    }

    /// Derive the state from the initialization values `m` and `n` (9.3.1.1).
    pub fn from_init_value(m: i8, n: i8, slice_qp_y: i32) -> Self {
        let qp = slice_qp_y.clamp(0, 51);
        let pre_ctx_state = (((m as i32 * qp) >> 4) + n as i32).clamp(1, 126);

        if pre_ctx_state <= 63 {
            Self::from_state((63 - pre_ctx_state) as u8, 0)
        } else {
            Self::from_state((pre_ctx_state - 64) as u8, 1)
        }
    }

    /// Create a context variable with the given state.
    ///
    /// `p_state_idx` is clamped to 63 and `val_mps` to 1.
    pub fn from_state(p_state_idx: u8, val_mps: u8) -> Self {
        Self {
            p_state_idx: p_state_idx.min(63),
            val_mps: val_mps.min(1),
        }
    }

    /// The probability state index, in `0..=63`.
    pub fn p_state_idx(&self) -> u8 {
        self.p_state_idx
    }

    /// The value of the most probable symbol, either 0 or 1.
    pub fn val_mps(&self) -> u8 {
        self.val_mps
    }

    /// Update the state after `bin` was coded with this context.
    pub fn transition(&mut self, bin: u8) {
        arithmetic_decoder::transition(self, bin);
    }
}

/// The context variables of one slice.
///
/// Variables are created on first use, so that only the contexts a slice actually
/// touches are derived.
#[derive(Clone, Debug)]
pub struct ContextStore {
    settings: SliceSettings,
    variables: [Option<ContextVariable>; NUM_CONTEXTS],
}

impl ContextStore {
    /// Create an empty store for a slice with the given settings.
    pub fn new(settings: SliceSettings) -> Self {
        Self {
            settings,
            variables: [None; NUM_CONTEXTS],
        }
    }

    /// Drop all context variables and start over with new slice settings.
    pub fn reset(&mut self, settings: SliceSettings) {
        ldebug!(
            "resetting context store for {:?} slice, SliceQPY {}",
            settings.slice_type,
            settings.slice_qp_y
        );

        self.settings = settings;
        self.variables = [None; NUM_CONTEXTS];
    }

    /// Initialize the variable at `ctx_idx`.
    ///
    /// Fails with [`ContextError::Reinitialization`] if the variable is already in use,
    /// unless `reinitialize` is set.
    pub fn initialize(&mut self, ctx_idx: u16, reinitialize: bool) -> Result<ContextVariable> {
        let Some(slot) = self.variables.get_mut(ctx_idx as usize) else {
            bail!(ContextError::InvalidInitializationEntry {
                ctx_idx,
                cabac_init_idc: (!self.settings.slice_type.is_intra())
                    .then_some(self.settings.cabac_init_idc),
            });
        };

        if slot.is_some() && !reinitialize {
            lwarn!("attempted to reinitialize context variable {}", ctx_idx);
            bail!(ContextError::Reinitialization { ctx_idx });
        }

        let variable = ContextVariable::new(ctx_idx, &self.settings)?;
        *slot = Some(variable);

        Ok(variable)
    }

    /// Return the variable at `ctx_idx` if it has been initialized.
    pub fn get(&self, ctx_idx: u16) -> Option<ContextVariable> {
        self.variables.get(ctx_idx as usize).copied().flatten()
    }

    /// Return the variable at `ctx_idx`, initializing it on first use.
    pub fn get_mut(&mut self, ctx_idx: u16) -> Result<&mut ContextVariable> {
        if self.get(ctx_idx).is_none() {
            self.initialize(ctx_idx, false)?;
        }

        match self
            .variables
            .get_mut(ctx_idx as usize)
            .and_then(Option::as_mut)
        {
            Some(variable) => Ok(variable),
            None => bail!(ContextError::InvalidInitializationEntry {
                ctx_idx,
                cabac_init_idc: None,
            }),
        }
    }

    /// The number of initialized variables.
    pub fn len(&self) -> usize {
        self.variables.iter().filter(|v| v.is_some()).count()
    }

    /// Whether no variable has been initialized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slice settings the variables are derived from.
    pub fn settings(&self) -> &SliceSettings {
        &self.settings
    }
}
