//! Scan orchestration: file discovery, the worker pool, and the overall
//! deadline. The orchestrator owns no scanning logic itself; it hands each
//! discovered file to [`scan_file`](crate::scanner::file_scanner::scan_file)
//! on a worker thread and folds the outcomes into a [`Report`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::InvocationError;
use crate::scanner::aggregator::aggregate;
use crate::scanner::external::{self, DiagnosticTool};
use crate::scanner::file_scanner::scan_file;
use crate::scanner::model::{FileOutcome, Report, ScanError};
use crate::scanner::registry::{language_for_path, RuleRegistry};

/// One unit of work for a worker thread.
struct ScanTask {
    file: PathBuf,
    language: &'static str,
}

/// Tunables for a scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Worker thread count. Defaults to the number of logical CPUs.
    pub workers: usize,
    /// Overall wall-clock deadline for the whole run. `None` means unbounded.
    pub timeout: Option<Duration>,
    /// Whether to run external diagnostic tools (gcc, php) per file.
    pub external_tools: bool,
    /// Per-invocation deadline for a single external tool.
    pub tool_timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            timeout: None,
            external_tools: false,
            tool_timeout: Duration::from_secs(10),
        }
    }
}

/// Lifecycle of one orchestrator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Drives one scan from input path to finished [`Report`].
pub struct ScanOrchestrator {
    registry: Arc<RuleRegistry>,
    config: ScanConfig,
    state: RunState,
}

impl ScanOrchestrator {
    pub fn new(registry: Arc<RuleRegistry>, config: ScanConfig) -> Self {
        Self {
            registry,
            config,
            state: RunState::Pending,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run a full scan over `input`, which may be a file or a directory.
    pub fn scan(&mut self, input: &Path) -> Result<Report, InvocationError> {
        self.state = RunState::Running;
        let result = self.scan_inner(input);
        self.state = match result {
            Ok(_) => RunState::Completed,
            Err(_) => RunState::Failed,
        };
        result
    }

    fn scan_inner(&self, input: &Path) -> Result<Report, InvocationError> {
        let started = Instant::now();
        let (tasks, skipped) = self.discover_files(input)?;

        if tasks.is_empty() && skipped > 0 {
            return Err(InvocationError::NoSupportedFiles(input.to_path_buf()));
        }

        info!(
            "scanning {} file(s) with {} worker(s), {} skipped",
            tasks.len(),
            self.config.workers.max(1),
            skipped
        );

        let outcomes = self.run_pool(tasks, started);
        Ok(aggregate(outcomes, skipped))
    }

    /// Walk the input and resolve each file to a language. Files whose
    /// extension maps to no rule table are counted as skipped, not errors.
    fn discover_files(&self, input: &Path) -> Result<(Vec<ScanTask>, usize), InvocationError> {
        if !input.exists() {
            return Err(InvocationError::InputNotFound(input.to_path_buf()));
        }

        let mut tasks = Vec::new();
        let mut skipped = 0usize;

        let mut files: Vec<PathBuf> = WalkDir::new(input)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(entry.into_path()),
                Ok(_) => None,
                Err(e) => {
                    warn!("skipping unreadable entry: {}", e);
                    None
                }
            })
            .collect();
        files.sort();

        for file in files {
            match language_for_path(&file) {
                Some(language) => tasks.push(ScanTask { file, language }),
                None => {
                    debug!("no rule table for {}, skipping", file.display());
                    skipped += 1;
                }
            }
        }

        Ok((tasks, skipped))
    }

    /// Fan tasks out to a fixed pool of worker threads and collect outcomes.
    /// When the overall deadline expires, files still in flight or queued are
    /// reported as timed out rather than silently dropped.
    fn run_pool(&self, tasks: Vec<ScanTask>, started: Instant) -> Vec<FileOutcome> {
        let total = tasks.len();
        if total == 0 {
            return Vec::new();
        }

        let workers = self.config.workers.max(1).min(total);
        let (task_tx, task_rx) = channel::unbounded::<ScanTask>();
        let (result_tx, result_rx) = channel::unbounded::<FileOutcome>();

        let tools: Arc<Vec<Box<dyn DiagnosticTool>>> = Arc::new(if self.config.external_tools {
            external::default_tools()
        } else {
            Vec::new()
        });

        let mut handles = Vec::with_capacity(workers);
        for thread_id in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let registry = Arc::clone(&self.registry);
            let tools = Arc::clone(&tools);
            let tool_timeout = self.config.tool_timeout;

            handles.push(thread::spawn(move || {
                worker_loop(thread_id, task_rx, result_tx, registry, tools, tool_timeout);
            }));
        }
        drop(task_rx);
        drop(result_tx);

        let mut pending: Vec<PathBuf> = Vec::with_capacity(total);
        for task in tasks {
            pending.push(task.file.clone());
            // Send can only fail if all workers died, handled below as timeouts.
            let _ = task_tx.send(task);
        }
        drop(task_tx);

        let mut outcomes = Vec::with_capacity(total);
        let mut timed_out = false;

        // A timeout too large to represent as an Instant means no deadline.
        let deadline = self
            .config
            .timeout
            .and_then(|limit| started.checked_add(limit));

        while outcomes.len() < total {
            let received = match deadline {
                Some(deadline) => {
                    match result_rx.recv_deadline(deadline) {
                        Ok(outcome) => Some(outcome),
                        Err(RecvTimeoutError::Timeout) => {
                            timed_out = true;
                            break;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => result_rx.recv().ok(),
            };

            match received {
                Some(outcome) => {
                    pending.retain(|file| file != &outcome.file);
                    outcomes.push(outcome);
                }
                None => break,
            }
        }

        if timed_out {
            warn!(
                "scan deadline reached, marking {} unfinished file(s)",
                pending.len()
            );
            for file in pending {
                outcomes.push(FileOutcome {
                    file: file.clone(),
                    result: Err(ScanError {
                        file,
                        reason: "timeout".to_string(),
                    }),
                });
            }
            // Workers are left detached; they exit once the result channel
            // disconnects.
            drop(handles);
        } else {
            for handle in handles {
                let _ = handle.join();
            }
        }

        outcomes
    }
}

fn worker_loop(
    thread_id: usize,
    task_rx: Receiver<ScanTask>,
    result_tx: Sender<FileOutcome>,
    registry: Arc<RuleRegistry>,
    tools: Arc<Vec<Box<dyn DiagnosticTool>>>,
    tool_timeout: Duration,
) {
    debug!("scan worker {} started", thread_id);

    while let Ok(task) = task_rx.recv() {
        let outcome = match registry.load(task.language) {
            Ok(rules) => {
                let mut result = scan_file(&task.file, rules);
                if let Ok(ref mut findings) = result {
                    findings.extend(external::run_tools(
                        &tools,
                        task.language,
                        &task.file,
                        tool_timeout,
                    ));
                }
                FileOutcome {
                    file: task.file,
                    result,
                }
            }
            // Discovery only emits registered languages; treat a miss as a
            // per-file error rather than poisoning the whole run.
            Err(e) => FileOutcome {
                file: task.file.clone(),
                result: Err(ScanError {
                    file: task.file,
                    reason: e.to_string(),
                }),
            },
        };

        if result_tx.send(outcome).is_err() {
            break;
        }
    }

    debug!("scan worker {} finished", thread_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::model::Severity;
    use std::fs;
    use tempfile::TempDir;

    fn orchestrator(config: ScanConfig) -> ScanOrchestrator {
        let registry = Arc::new(RuleRegistry::build().expect("rule tables compile"));
        ScanOrchestrator::new(registry, config)
    }

    #[test]
    fn missing_input_is_an_invocation_error() {
        let mut orch = orchestrator(ScanConfig::default());
        let err = orch.scan(Path::new("/nonexistent/path/xyz")).unwrap_err();
        assert!(matches!(err, InvocationError::InputNotFound(_)));
        assert_eq!(orch.state(), RunState::Failed);
    }

    #[test]
    fn directory_with_only_unsupported_files_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();
        fs::write(dir.path().join("data.bin"), [0u8, 1, 2]).unwrap();

        let mut orch = orchestrator(ScanConfig::default());
        let err = orch.scan(dir.path()).unwrap_err();
        assert!(matches!(err, InvocationError::NoSupportedFiles(_)));
    }

    #[test]
    fn empty_directory_yields_an_empty_report() {
        let dir = TempDir::new().unwrap();
        let mut orch = orchestrator(ScanConfig::default());
        let report = orch.scan(dir.path()).unwrap();
        assert_eq!(report.total_files, 0);
        assert_eq!(report.files_with_findings, 0);
        assert!(report.findings.is_empty());
        assert!(report.errors.is_empty());
        assert_eq!(orch.state(), RunState::Completed);
    }

    #[test]
    fn scan_of_a_single_file_input() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.py");
        fs::write(&file, "import pickle\npickle.loads(data)\n").unwrap();

        let mut orch = orchestrator(ScanConfig::default());
        let report = orch.scan(&file).unwrap();
        assert_eq!(report.total_files, 1);
        assert_eq!(report.files_with_findings, 1);
        assert!(report.findings.iter().any(|f| f.category == "deserialization"));
    }

    #[test]
    fn mixed_directory_counts_skipped_and_scanned_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vuln.c"), "strcpy(dst, src);\n").unwrap();
        fs::write(dir.path().join("clean.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("readme.md"), "# readme\n").unwrap();

        let mut orch = orchestrator(ScanConfig::default());
        let report = orch.scan(dir.path()).unwrap();
        assert_eq!(report.total_files, 2);
        assert_eq!(report.files_skipped, 1);
        assert_eq!(report.files_with_findings, 1);
        assert!(report
            .findings
            .iter()
            .any(|f| f.severity == Severity::Critical && f.snippet.contains("strcpy")));
    }

    #[test]
    fn absurdly_large_timeout_behaves_as_unbounded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.c"), "gets(buf);\n").unwrap();

        let mut orch = orchestrator(ScanConfig {
            timeout: Some(Duration::from_secs(u64::MAX)),
            ..ScanConfig::default()
        });
        let report = orch.scan(dir.path()).unwrap();
        assert_eq!(report.total_files, 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unreadable_file_is_counted_but_contributes_no_findings() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked.c");
        fs::write(&locked, "strcpy(dst, src);\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read(&locked).is_ok() {
            // Running as root, the permission bits are not enforced.
            return;
        }
        fs::write(dir.path().join("ok.py"), "eval(user_input)\n").unwrap();

        let mut orch = orchestrator(ScanConfig::default());
        let report = orch.scan(dir.path()).unwrap();

        assert_eq!(report.total_files, 2);
        assert_eq!(report.files_with_findings, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].file, locked);
        assert_eq!(report.errors[0].reason, "permission denied");
        assert!(report.findings.iter().all(|f| f.file != locked));
    }

    #[test]
    fn single_worker_produces_same_totals_as_many() {
        let dir = TempDir::new().unwrap();
        for i in 0..8 {
            fs::write(
                dir.path().join(format!("f{i}.php")),
                "<?php eval($_GET['x']); ?>\n",
            )
            .unwrap();
        }

        let mut one = orchestrator(ScanConfig {
            workers: 1,
            ..ScanConfig::default()
        });
        let mut many = orchestrator(ScanConfig {
            workers: 4,
            ..ScanConfig::default()
        });

        let a = one.scan(dir.path()).unwrap();
        let b = many.scan(dir.path()).unwrap();
        assert_eq!(a.total_files, b.total_files);
        assert_eq!(a.findings, b.findings);
    }
}
