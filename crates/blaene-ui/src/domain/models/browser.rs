/// Window-level capabilities that are not tied to one element.
pub trait Browser: Send {
    /// Whether the device exposes WebXR.
    fn supports_xr(&self) -> bool;
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    /// Append a stylesheet to the document head.
    fn inject_style(&self, css: &str);
}

pub type BrowserBox = Box<dyn Browser>;
