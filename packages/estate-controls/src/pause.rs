use cosmwasm_std::{Addr, Event, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ControlError;

/// Global pause flag. Mutating handlers call [`PauseSwitch::assert_not_paused`]
/// first; who may flip the switch is decided by the contract.
pub struct PauseSwitch<'a> {
    paused: Item<'a, bool>,
}

impl<'a> PauseSwitch<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        PauseSwitch {
            paused: Item::new(namespace),
        }
    }

    pub fn initialize(&self, storage: &mut dyn Storage) -> StdResult<()> {
        self.paused.save(storage, &false)
    }

    pub fn is_paused(&self, storage: &dyn Storage) -> StdResult<bool> {
        Ok(self.paused.may_load(storage)?.unwrap_or(false))
    }

    pub fn assert_not_paused(&self, storage: &dyn Storage) -> Result<(), ControlError> {
        if self.is_paused(storage)? {
            return Err(ControlError::Paused {});
        }
        Ok(())
    }

    pub fn pause(&self, storage: &mut dyn Storage, by: &Addr) -> Result<Event, ControlError> {
        self.assert_not_paused(storage)?;
        self.paused.save(storage, &true)?;
        Ok(Event::new("paused").add_attribute("account", by))
    }

    pub fn unpause(&self, storage: &mut dyn Storage, by: &Addr) -> Result<Event, ControlError> {
        if !self.is_paused(storage)? {
            return Err(ControlError::NotPaused {});
        }
        self.paused.save(storage, &false)?;
        Ok(Event::new("unpaused").add_attribute("account", by))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const SWITCH: PauseSwitch = PauseSwitch::new("paused");

    #[test]
    fn pause_then_unpause() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");
        SWITCH.initialize(&mut storage).unwrap();
        assert!(!SWITCH.is_paused(&storage).unwrap());
        SWITCH.assert_not_paused(&storage).unwrap();

        let event = SWITCH.pause(&mut storage, &admin).unwrap();
        assert_eq!(event.ty, "paused");
        assert!(SWITCH.is_paused(&storage).unwrap());
        assert_eq!(
            SWITCH.assert_not_paused(&storage).unwrap_err().to_string(),
            "Pausable: paused"
        );

        let event = SWITCH.unpause(&mut storage, &admin).unwrap();
        assert_eq!(event.ty, "unpaused");
        SWITCH.assert_not_paused(&storage).unwrap();
    }

    #[test]
    fn toggling_twice_is_rejected() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");

        // missing flag reads as not paused
        assert_eq!(
            SWITCH.unpause(&mut storage, &admin).unwrap_err(),
            ControlError::NotPaused {}
        );

        SWITCH.pause(&mut storage, &admin).unwrap();
        assert_eq!(
            SWITCH.pause(&mut storage, &admin).unwrap_err(),
            ControlError::Paused {}
        );
    }
}
