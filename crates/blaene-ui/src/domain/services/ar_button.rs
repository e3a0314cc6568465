use crate::domain::models::Browser;
use crate::domain::models::ElementBox;

#[cfg(test)]
#[path = "ar_button_test.rs"]
mod tests;

pub const AR_LAUNCH_MESSAGE: &str = "AR deneyimi başlatılıyor... (Demo modunda)";
pub const AR_UNSUPPORTED_MESSAGE: &str =
    "Cihazınız AR'ı desteklemiyor. Mobil cihazınızdan deneyebilirsiniz.";

/// Demo AR entry point. Only tells the visitor whether AR would start.
pub struct ArButton {
    _button: ElementBox,
}

impl ArButton {
    pub fn new(button: Option<ElementBox>) -> Option<ArButton> {
        return Some(ArButton { _button: button? });
    }

    pub fn on_clicked(&self, browser: &dyn Browser) {
        if browser.supports_xr() {
            browser.alert(AR_LAUNCH_MESSAGE);
        } else {
            browser.alert(AR_UNSUPPORTED_MESSAGE);
        }
    }
}
