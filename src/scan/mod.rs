/// Scan domain - Maven coordinates, dependency records, advisory correlation
///
/// Pure business logic: no I/O, no async. Everything that talks to the
/// network or the file system lives behind the ports.
pub mod domain;
pub mod services;
