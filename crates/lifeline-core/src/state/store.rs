use super::events::Event;
use super::types::Command;

/// Trait for dispatching counter commands.
///
/// # Semantics
///
/// - **Ordering**: Commands apply in the order received.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in the order they happened. A life change that lands on zero
///   yields `LifeChanged` followed by `LifeEmptied`.
/// - **Errors**: Implementations pick their own error type. A failed command
///   leaves the counters untouched.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerSlot;

    #[test]
    fn test_store_trait_is_implementable() {
        struct EchoStore;
        impl Store for EchoStore {
            type Error = String;
            fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, String> {
                match cmd {
                    Command::ResetAll => Ok(vec![Event::LifeReset { total: 8000 }]),
                    other => Err(format!("unsupported: {:?}", other)),
                }
            }
        }

        let mut store = EchoStore;
        assert_eq!(store.dispatch(Command::ResetAll).unwrap().len(), 1);
        assert!(
            store
                .dispatch(Command::Halve {
                    player: PlayerSlot::One
                })
                .is_err()
        );
    }
}
