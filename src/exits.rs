//! Exit handling: signal handlers and terminal restoration.

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP.
/// Only async-signal-safe calls: restore the tty, end the prompt line, `_exit`.
extern "C" fn signal_handler(_: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, b"\x1b[0m\r\n".as_ptr() as *const libc::c_void, 6);
        }
        libc::_exit(130)
    }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) };
}

/// Reset terminal state (public for use in main)
pub fn reset_terminal() {
    reset_terminal_termios();
    crate::terminal::reset_terminal();
}
