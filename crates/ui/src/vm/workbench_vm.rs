use chainlab_core::model::Workbench;

/// Everything a visitor can do on the contract workbench.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenchIntent {
    Compile,
    Deploy,
    Vote(usize),
    Select(usize),
    Reset,
}

/// View model for the contract workbench: the simulated bench plus the
/// currently inspected source line.
pub struct WorkbenchVm {
    bench: Workbench,
    selected_line: Option<usize>,
    notice: Option<String>,
}

impl WorkbenchVm {
    #[must_use]
    pub fn new(bench: Workbench) -> Self {
        Self {
            bench,
            selected_line: None,
            notice: None,
        }
    }

    #[must_use]
    pub fn bench(&self) -> &Workbench {
        &self.bench
    }

    #[must_use]
    pub fn selected_line(&self) -> Option<usize> {
        self.selected_line
    }

    /// The teaching note for the selected line, when it has one.
    #[must_use]
    pub fn selected_note(&self) -> Option<&str> {
        self.selected_line
            .and_then(|line| self.bench.contract().note_for_line(line))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Selects a source line; selecting it again puts the note away.
    pub fn select_line(&mut self, line: usize) {
        if self.selected_line == Some(line) {
            self.selected_line = None;
        } else {
            self.selected_line = Some(line);
        }
    }

    pub fn apply(&mut self, intent: BenchIntent) {
        match intent {
            BenchIntent::Compile => {
                self.bench.compile();
                self.notice = None;
            }
            BenchIntent::Deploy => match self.bench.deploy() {
                Ok(_) => self.notice = None,
                Err(err) => self.notice = Some(err.to_string()),
            },
            BenchIntent::Vote(index) => match self.bench.cast_vote(index) {
                Ok(_) => self.notice = None,
                Err(err) => self.notice = Some(err.to_string()),
            },
            BenchIntent::Select(line) => self.select_line(line),
            BenchIntent::Reset => {
                self.bench.reset();
                self.selected_line = None;
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::content::contract;

    fn vm() -> WorkbenchVm {
        WorkbenchVm::new(contract::workbench().unwrap())
    }

    #[test]
    fn deploy_before_compile_is_a_notice() {
        let mut vm = vm();
        vm.apply(BenchIntent::Deploy);
        assert!(vm.notice().is_some());
        assert!(!vm.bench().is_deployed());
    }

    #[test]
    fn compile_clears_an_earlier_notice() {
        let mut vm = vm();
        vm.apply(BenchIntent::Deploy);
        vm.apply(BenchIntent::Compile);
        assert!(vm.notice().is_none());
        assert!(vm.bench().is_compiled());
    }

    #[test]
    fn line_selection_toggles() {
        let mut vm = vm();
        vm.apply(BenchIntent::Select(4));
        assert!(vm.selected_note().is_some());
        vm.apply(BenchIntent::Select(4));
        assert_eq!(vm.selected_line(), None);
    }

    #[test]
    fn selecting_an_unannotated_line_shows_no_note() {
        let mut vm = vm();
        vm.apply(BenchIntent::Select(2));
        assert_eq!(vm.selected_line(), Some(2));
        assert_eq!(vm.selected_note(), None);
    }

    #[test]
    fn reset_drops_the_selection() {
        let mut vm = vm();
        vm.apply(BenchIntent::Compile);
        vm.apply(BenchIntent::Select(4));
        vm.apply(BenchIntent::Reset);
        assert_eq!(vm.selected_line(), None);
        assert!(!vm.bench().is_compiled());
    }

    #[test]
    fn full_flow_tallies_a_vote() {
        let mut vm = vm();
        vm.apply(BenchIntent::Compile);
        vm.apply(BenchIntent::Deploy);
        vm.apply(BenchIntent::Vote(0));
        assert_eq!(vm.bench().candidates()[0].votes(), 1);
        assert!(vm.notice().is_none());
    }
}
