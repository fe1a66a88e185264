//! Book details modal: the open/close state machine and the seams it drives.

pub mod controller;
pub mod ports;
pub mod template;

pub use controller::{ModalController, ModalDeps, ModalState, ESCAPE_KEY_CODE};
pub use ports::{BookFetcher, ModalView, Spinner, TemplateRenderer, UserDataWriter};
pub use template::ModalTemplateData;

/// Which shopping list controls are shown in the open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlVisibility {
    pub add_button: bool,
    pub remove_block: bool,
}

impl ControlVisibility {
    /// Signed-out users see neither control. Signed-in users see "add" for
    /// books not yet listed and the remove block for listed ones.
    pub fn for_session(logged_in: bool, in_list: bool) -> Self {
        Self {
            add_button: logged_in && !in_list,
            remove_block: logged_in && in_list,
        }
    }

    pub fn added() -> Self {
        Self::for_session(true, true)
    }

    pub fn removed() -> Self {
        Self::for_session(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, false, false)]
    #[case(false, true, false, false)]
    #[case(true, false, true, false)]
    #[case(true, true, false, true)]
    fn test_control_visibility(
        #[case] logged_in: bool,
        #[case] in_list: bool,
        #[case] add_button: bool,
        #[case] remove_block: bool,
    ) {
        let controls = ControlVisibility::for_session(logged_in, in_list);
        assert_eq!(controls, ControlVisibility { add_button, remove_block });
    }
}
