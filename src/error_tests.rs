use std::io;

use super::*;

fn io_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "no such file")
}

#[yare::parameterized(
    missing   = { Error::MissingResponseFile { count: 1 }, ErrorKind::Argument, 2 },
    malformed = { Error::MalformedResponseFile { argument: "rsp.txt".into(), marker: '@' }, ErrorKind::Argument, 2 },
    read      = { Error::ReadResponseFile { path: "rsp.txt".into(), cause: io_error() }, ErrorKind::Filesystem, 1 },
    write     = { Error::WriteArtifact { path: "bin/rspfile".into(), cause: io_error() }, ErrorKind::Filesystem, 1 },
    launch    = { Error::Launch { program: "dotnet".into(), cause: io_error() }, ErrorKind::Launch, 1 },
    mirror    = { Error::Mirror { stream: "stderr", cause: io_error() }, ErrorKind::Capture, 1 },
)]
fn classification(error: Error, kind: ErrorKind, exit_code: i32) {
    assert_eq!(error.kind(), kind);
    assert_eq!(error.exit_code(), exit_code);
}

#[test]
fn missing_response_file_display() {
    let error = Error::MissingResponseFile { count: 1 };
    let display = error.to_string();
    assert!(display.contains("at least 2 arguments"));
    assert!(display.ends_with("got 1"));
}

#[test]
fn malformed_response_file_display() {
    let error = Error::MalformedResponseFile {
        argument: "rsp.txt".into(),
        marker: '@',
    };
    assert_eq!(
        error.to_string(),
        "`rsp.txt` is not a response file reference, expected `@<path>`"
    );
}

#[test]
fn launch_error_names_the_launcher() {
    let error = Error::Launch {
        program: "dotnet".into(),
        cause: io_error(),
    };
    assert_eq!(error.to_string(), "failed to launch `dotnet`: no such file");
    assert!(error.cause().is_some());
}
