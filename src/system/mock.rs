//! Mock system implementation for testing

use super::{CommandOutput, System};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// A recorded subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// `true` when run attached to the terminal through `System::status`
    pub interactive: bool,
}

impl Invocation {
    /// Program and arguments joined by single spaces
    #[must_use]
    #[inline]
    pub fn command_line(&self) -> String {
        command_key(&self.program, &self.args)
    }
}

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and scripted subprocess
/// responses. Every subprocess call is recorded so tests can assert on
/// exactly which Git and editor commands ran.
///
/// # Example
/// ```
/// use git_sparse::system::{CommandOutput, MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/repo/.git/info/sparse-checkout", b"src/\n").unwrap()
///     .with_command("git", &["config", "--list"], CommandOutput::success("core.bare=false\n")).unwrap();
///
/// assert!(system.exists(Path::new("/repo/.git/info")));
/// let out = system.output("git", &["config", "--list"], Path::new("/repo")).unwrap();
/// assert_eq!(out.stdout, "core.bare=false\n");
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    commands: HashMap<String, CommandOutput>,
    missing_programs: HashSet<String>,
    create_dir_failure: Option<DirFailure>,
    invocations: Vec<Invocation>,
}

#[derive(Clone, Copy)]
enum DirFailure {
    /// Another process wins the race: the directory appears, the call reports `AlreadyExists`
    Raced,
    /// The call fails and nothing is created
    Fails(io::ErrorKind),
}

fn lock_error<E: ToString>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}

fn command_key<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut key = program.to_owned();
    for arg in args {
        key.push(' ');
        key.push_str(arg.as_ref());
    }
    key
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                commands: HashMap::new(),
                missing_programs: HashSet::new(),
                create_dir_failure: None,
                invocations: Vec::new(),
            })),
        }
    }

    /// Set the current working directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.current_dir = dir.as_ref().to_path_buf();
        drop(state);
        Ok(self)
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self.state.write().map_err(lock_error)?;

        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        Self::ensure_parent_dirs(&mut state.dirs, path.as_ref());
        drop(state);
        Ok(self)
    }

    /// Script the output of a command (builder pattern)
    ///
    /// Commands that are not scripted succeed with empty output.
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_command(self, program: &str, args: &[&str], output: CommandOutput) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.commands.insert(command_key(program, args), output);
        drop(state);
        Ok(self)
    }

    /// Make every attempt to spawn `program` fail with `NotFound` (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_missing_program(self, program: &str) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.missing_programs.insert(program.to_owned());
        drop(state);
        Ok(self)
    }

    /// Simulate another process creating directories first (builder pattern)
    ///
    /// `create_dir_all` creates the directory but reports `AlreadyExists`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_racing_dir_creation(self) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.create_dir_failure = Some(DirFailure::Raced);
        drop(state);
        Ok(self)
    }

    /// Make `create_dir_all` fail with the given error kind (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_create_dir_error(self, kind: io::ErrorKind) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.create_dir_failure = Some(DirFailure::Fails(kind));
        drop(state);
        Ok(self)
    }

    /// All subprocess invocations in call order
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn invocations(&self) -> io::Result<Vec<Invocation>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.invocations.clone())
    }

    /// Invocations rendered as command lines, in call order
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn command_lines(&self) -> io::Result<Vec<String>> {
        Ok(self
            .invocations()?
            .iter()
            .map(Invocation::command_line)
            .collect())
    }

    /// Read a file from the in-memory filesystem as UTF-8
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8
    #[inline]
    pub fn read_to_string<P: AsRef<Path>>(&self, path: P) -> io::Result<String> {
        String::from_utf8(self.read(path.as_ref())?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn run(&self, program: &str, args: &[&str], cwd: &Path, interactive: bool) -> io::Result<CommandOutput> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.missing_programs.contains(program) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("program not found: {program}"),
            ));
        }

        state.invocations.push(Invocation {
            program: program.to_owned(),
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
            cwd: cwd.to_path_buf(),
            interactive,
        });

        let output = state
            .commands
            .get(&command_key(program, args))
            .cloned()
            .unwrap_or_else(|| CommandOutput::success(""));
        drop(state);

        if interactive {
            return Ok(CommandOutput {
                code: output.code,
                ..CommandOutput::default()
            });
        }
        Ok(output)
    }

    fn parent_exists(state: &MockSystemState, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
        Ok(())
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.current_dir.clone())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path) || state.dirs.contains(path))
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let failure = state.create_dir_failure;
        match failure {
            Some(DirFailure::Fails(kind)) => {
                return Err(io::Error::new(kind, format!("cannot create {}", path.display())));
            }
            Some(DirFailure::Raced) => {
                Self::ensure_parent_dirs(&mut state.dirs, path);
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", path.display()),
                ));
            }
            None => Self::ensure_parent_dirs(&mut state.dirs, path),
        }
        drop(state);
        Ok(())
    }

    #[inline]
    fn touch(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        Self::parent_exists(&state, path)?;
        state.files.entry(path.to_path_buf()).or_default();
        drop(state);
        Ok(())
    }

    #[inline]
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        Self::parent_exists(&state, path)?;
        state
            .files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(contents);
        drop(state);
        Ok(())
    }

    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let state = self.state.read().map_err(lock_error)?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        Ok(result)
    }

    #[inline]
    fn output(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        self.run(program, args, cwd, false)
    }

    #[inline]
    fn status(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        self.run(program, args, cwd, true)
    }
}
