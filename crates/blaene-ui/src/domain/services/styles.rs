/// Inline animation applied to an entry coming back into the layout.
pub const FADE_IN_ANIMATION: &str = "fadeIn 0.3s ease forwards";

/// Inline animation applied to an entry or admin row on its way out.
pub const FADE_OUT_ANIMATION: &str = "fadeOut 0.3s ease forwards";

/// Stylesheet injected once at startup for reveal animations, the catalog
/// keyframes and the open mobile menu.
pub const ANIMATION_STYLES: &str = r#"
  .animate-ready {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
  }

  .animate-in {
    opacity: 1;
    transform: translateY(0);
  }

  @keyframes fadeIn {
    from {
      opacity: 0;
      transform: scale(0.95);
    }
    to {
      opacity: 1;
      transform: scale(1);
    }
  }

  @keyframes fadeOut {
    from {
      opacity: 1;
      transform: scale(1);
    }
    to {
      opacity: 0;
      transform: scale(0.95);
    }
  }

  .navbar__menu.active {
    display: flex;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    background: rgba(10, 10, 10, 0.98);
    padding: 1rem 2rem 2rem;
    gap: 1rem;
  }

  .navbar__toggle.active span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
  }

  .navbar__toggle.active span:nth-child(2) {
    opacity: 0;
  }

  .navbar__toggle.active span:nth-child(3) {
    transform: rotate(-45deg) translate(7px, -6px);
  }
"#;
