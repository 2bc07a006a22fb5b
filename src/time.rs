//! Platform-agnostic time utilities
//!
//! Milliseconds since an arbitrary origin (page load in the browser, first
//! call on native), matching the `requestAnimationFrame` timestamp scale.

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn now_millis() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
pub fn now_millis() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

pub fn now_seconds() -> f64 {
    now_millis() / 1000.0
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn monotonic() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
        assert!(now_seconds() >= a / 1000.0);
    }
}
