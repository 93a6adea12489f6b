use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingOps {
    setups: AtomicUsize,
    restores: AtomicUsize,
}

impl TerminalOps for CountingOps {
    fn setup(&self) -> std::io::Result<()> {
        self.setups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn guard_sets_up_on_create_and_restores_on_drop() {
    let ops = Arc::new(CountingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        assert_eq!(ops.setups.load(Ordering::SeqCst), 1);
        assert_eq!(ops.restores.load(Ordering::SeqCst), 0);
    }
    assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
}

#[test]
fn restore_happens_at_most_once() {
    let ops = Arc::new(CountingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_setup_propagates() {
    struct FailingOps;
    impl TerminalOps for FailingOps {
        fn setup(&self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"))
        }
        fn restore(&self) -> std::io::Result<()> {
            Ok(())
        }
    }

    assert!(TerminalGuard::with_ops(Arc::new(FailingOps)).is_err());
}

#[test]
fn signal_exit_codes_follow_convention() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
