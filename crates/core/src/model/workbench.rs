use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkbenchError {
    #[error("contract name cannot be empty")]
    EmptyName,

    #[error("contract source cannot be empty")]
    EmptySource,

    #[error("note references line {line}, but the source has {lines} lines")]
    NoteOutOfRange { line: usize, lines: usize },

    #[error("workbench needs at least one candidate")]
    NoCandidates,

    #[error("compile the contract before deploying")]
    NotCompiled,

    #[error("the contract is already deployed")]
    AlreadyDeployed,

    #[error("deploy the contract before voting")]
    NotDeployed,

    #[error("no candidate at index {index}")]
    UnknownCandidate { index: usize },
}

//
// ─── CONTRACT SOURCE ───────────────────────────────────────────────────────────
//

/// Display text for the workbench editor: a contract source with
/// per-line annotations. Line numbers are 1-based, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSource {
    name: String,
    code: String,
    notes: Vec<(usize, String)>,
}

impl ContractSource {
    /// # Errors
    ///
    /// Rejects an empty name or source, and any note pointing outside the
    /// source's line range.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        notes: Vec<(usize, String)>,
    ) -> Result<Self, WorkbenchError> {
        let name = name.into();
        let code = code.into();
        if name.trim().is_empty() {
            return Err(WorkbenchError::EmptyName);
        }
        if code.trim().is_empty() {
            return Err(WorkbenchError::EmptySource);
        }
        let lines = code.lines().count();
        for (line, _) in &notes {
            if *line == 0 || *line > lines {
                return Err(WorkbenchError::NoteOutOfRange { line: *line, lines });
            }
        }
        Ok(Self { name, code, notes })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// The annotation for a 1-based line number, if any.
    #[must_use]
    pub fn note_for_line(&self, line: usize) -> Option<&str> {
        self.notes
            .iter()
            .find(|(l, _)| *l == line)
            .map(|(_, text)| text.as_str())
    }
}

//
// ─── WORKBENCH ─────────────────────────────────────────────────────────────────
//

/// One candidate on the simulated ballot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    votes: u32,
}

impl Candidate {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn votes(&self) -> u32 {
        self.votes
    }
}

/// Simulated contract IDE state: compile, deploy, then vote.
///
/// Nothing here touches a real toolchain or chain. Each operation runs
/// synchronously, appends its console lines to the log, and returns the
/// lines it added so a caller can reveal them gradually. Guards reject
/// out-of-order operations without changing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbench {
    contract: ContractSource,
    candidates: Vec<Candidate>,
    deploy_address: String,
    compiled: bool,
    deployed: bool,
    log: Vec<String>,
}

impl Workbench {
    /// # Errors
    ///
    /// Returns `WorkbenchError::NoCandidates` for an empty ballot.
    pub fn new(
        contract: ContractSource,
        candidate_names: Vec<String>,
        deploy_address: impl Into<String>,
    ) -> Result<Self, WorkbenchError> {
        if candidate_names.is_empty() {
            return Err(WorkbenchError::NoCandidates);
        }
        let candidates = candidate_names
            .into_iter()
            .map(|name| Candidate { name, votes: 0 })
            .collect();
        Ok(Self {
            contract,
            candidates,
            deploy_address: deploy_address.into(),
            compiled: false,
            deployed: false,
            log: Vec::new(),
        })
    }

    // ─── operations ───

    /// Runs the simulated compile. Always accepted, including recompiles;
    /// an existing deployment is left alone. The log restarts from the
    /// compile banner, matching a fresh build.
    pub fn compile(&mut self) -> Vec<String> {
        self.compiled = true;
        self.log.clear();
        self.emit(vec![
            "Compiling the smart contract...".to_string(),
            "✓ Syntax check passed".to_string(),
            "✓ Type check passed".to_string(),
            "✓ Contract compiled successfully!".to_string(),
            "Compilation complete. The contract can be deployed to the network.".to_string(),
        ])
    }

    /// Runs the simulated deployment.
    ///
    /// # Errors
    ///
    /// `NotCompiled` before a successful compile, `AlreadyDeployed` on a
    /// second attempt.
    pub fn deploy(&mut self) -> Result<Vec<String>, WorkbenchError> {
        if !self.compiled {
            return Err(WorkbenchError::NotCompiled);
        }
        if self.deployed {
            return Err(WorkbenchError::AlreadyDeployed);
        }
        self.deployed = true;
        Ok(self.emit(vec![
            "Deploying the smart contract...".to_string(),
            "Contract deployed successfully!".to_string(),
            format!("Contract address: {}", self.deploy_address),
            "The contract is ready to receive transactions.".to_string(),
        ]))
    }

    /// Casts one simulated vote for the candidate at `index`.
    ///
    /// # Errors
    ///
    /// `NotDeployed` before deployment, `UnknownCandidate` for an index
    /// outside the ballot.
    pub fn cast_vote(&mut self, index: usize) -> Result<Vec<String>, WorkbenchError> {
        if !self.deployed {
            return Err(WorkbenchError::NotDeployed);
        }
        let Some(candidate) = self.candidates.get_mut(index) else {
            return Err(WorkbenchError::UnknownCandidate { index });
        };
        candidate.votes += 1;
        let name = candidate.name.clone();
        let votes = candidate.votes;
        Ok(self.emit(vec![
            format!("Casting a vote for {name}..."),
            format!("Vote successful! {name} now has {votes} vote(s)."),
        ]))
    }

    /// Returns the workbench to its initial state: nothing compiled,
    /// nothing deployed, tallies and log cleared.
    pub fn reset(&mut self) {
        self.compiled = false;
        self.deployed = false;
        self.log.clear();
        for candidate in &mut self.candidates {
            candidate.votes = 0;
        }
    }

    // ─── accessors ───

    #[must_use]
    pub fn contract(&self) -> &ContractSource {
        &self.contract
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    #[must_use]
    pub fn is_deployed(&self) -> bool {
        self.deployed
    }

    /// The simulated on-chain address, present once deployed.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.deployed.then_some(self.deploy_address.as_str())
    }

    /// Full console history in emit order.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    fn emit(&mut self, lines: Vec<String>) -> Vec<String> {
        self.log.extend(lines.iter().cloned());
        lines
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
