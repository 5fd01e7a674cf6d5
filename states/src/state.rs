use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx).
///
/// States are owned by the UI thread. Async work never touches them directly;
/// it goes through an [`Updater`](crate::Updater) instead.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of this state handed to commands at dispatch time.
    ///
    /// States returning `None` are invisible to commands.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
