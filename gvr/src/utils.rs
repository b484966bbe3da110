use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

// Generates a unique identifier for a controller session
pub fn new_id() -> u32 {
    ID_COUNTER.fetch_add(1, SeqCst) as u32
}
