//! Release targets and the fixed build matrix.

use std::fmt;

/// Target operating system, named as the Go toolchain names it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Os {
    /// macOS
    Darwin,
    /// Linux
    Linux,
    /// Windows
    Windows,
}

impl Os {
    /// Value passed to the compiler as `GOOS`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }

    /// File name suffix for executables on this platform.
    pub const fn executable_suffix(self) -> &'static str {
        match self {
            Os::Windows => ".exe",
            Os::Darwin | Os::Linux => "",
        }
    }

    /// Archive format used to distribute binaries for this platform.
    pub const fn archive_kind(self) -> ArchiveKind {
        match self {
            Os::Windows => ArchiveKind::Zip,
            Os::Darwin | Os::Linux => ArchiveKind::TarGzip,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target CPU architecture, named as the Go toolchain names it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Arch {
    /// AArch64 / ARM64 (64-bit)
    Arm64,
    /// x86_64 / AMD64 (64-bit)
    Amd64,
    /// x86 / i386 (32-bit)
    X86,
}

impl Arch {
    /// Value passed to the compiler as `GOARCH`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::Amd64 => "amd64",
            Arch::X86 => "386",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archive format for a packaged binary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArchiveKind {
    /// gzip-compressed tarball
    TarGzip,
    /// zip file
    Zip,
}

impl ArchiveKind {
    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            ArchiveKind::TarGzip => "tar.gz",
            ArchiveKind::Zip => "zip",
        }
    }
}

/// A single (operating system, architecture) pair to build and package.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Target {
    os: Os,
    arch: Arch,
}

impl Target {
    /// Creates a target.
    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Target operating system.
    pub const fn os(&self) -> Os {
        self.os
    }

    /// Target architecture.
    pub const fn arch(&self) -> Arch {
        self.arch
    }

    /// Archive format for this target.
    pub const fn archive_kind(&self) -> ArchiveKind {
        self.os.archive_kind()
    }

    /// Binary file name for `program` on this target (`jqawk` or `jqawk.exe`).
    pub fn binary_name(&self, program: &str) -> String {
        format!("{program}{}", self.os.executable_suffix())
    }

    /// Archive base name without extension: `<program>-<version>-<os>-<arch>`.
    pub fn artifact_base_name(&self, program: &str, version: &str) -> String {
        format!("{program}-{version}-{}-{}", self.os, self.arch)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

/// Every release target, in build order.
pub const TARGET_MATRIX: [Target; 8] = [
    Target::new(Os::Darwin, Arch::Arm64),
    Target::new(Os::Darwin, Arch::Amd64),
    Target::new(Os::Linux, Arch::Arm64),
    Target::new(Os::Linux, Arch::Amd64),
    Target::new(Os::Linux, Arch::X86),
    Target::new(Os::Windows, Arch::Arm64),
    Target::new(Os::Windows, Arch::Amd64),
    Target::new(Os::Windows, Arch::X86),
];
