use super::ArButton;
use super::AR_LAUNCH_MESSAGE;
use super::AR_UNSUPPORTED_MESSAGE;
use crate::infrastructure::memory::MemoryBrowser;
use crate::infrastructure::memory::MemoryElement;

#[test]
fn it_announces_the_demo_on_xr_devices() {
    let browser = MemoryBrowser::new().with_xr(true);
    let button = ArButton::new(Some(MemoryElement::new().boxed())).unwrap();

    button.on_clicked(&browser);

    assert_eq!(browser.alerts(), vec![AR_LAUNCH_MESSAGE.to_string()]);
}

#[test]
fn it_explains_missing_xr_support() {
    let browser = MemoryBrowser::new();
    let button = ArButton::new(Some(MemoryElement::new().boxed())).unwrap();

    button.on_clicked(&browser);

    assert_eq!(
        browser.alerts(),
        vec!["Cihazınız AR'ı desteklemiyor. Mobil cihazınızdan deneyebilirsiniz.".to_string()]
    );
    assert_eq!(AR_UNSUPPORTED_MESSAGE, browser.alerts()[0]);
}
