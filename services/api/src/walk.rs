use crate::infra::parse_answer_arg;
use clap::Args;
use decision_guide::config::AppConfig;
use decision_guide::error::AppError;
use decision_guide::workflows::normative::export::{
    export_summary, ExportOutcome, FileSink, StdoutSink, SummarySink,
};
use decision_guide::workflows::normative::views::{DecisionStateView, DecisionStatus};
use decision_guide::workflows::normative::{
    Answer, AnswerSet, DecisionService, DecisionServiceError, DecisionSession, Factor,
    Resolution, Style,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Answer as FACTOR=H|L (repeatable), e.g. --answer DS=H --answer IC=L
    #[arg(long = "answer", short = 'a', value_parser = parse_answer_arg)]
    pub(crate) answers: Vec<(Factor, Answer)>,
    /// One-sentence description of the decision, used in the summary
    #[arg(long)]
    pub(crate) problem: Option<String>,
    /// Print the state as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct WalkArgs {
    /// One-sentence description of the decision (prompted when omitted)
    #[arg(long)]
    pub(crate) problem: Option<String>,
    /// Write the final summary to this file (defaults to APP_EXPORT_PATH, then stdout)
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkOutcome {
    Completed(Style),
    Abandoned,
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let ResolveArgs {
        answers,
        problem,
        json,
    } = args;

    let answers = collect_answer_args(answers)?;

    let service = DecisionService::standard();
    let view = service.resolve_answers(&answers)?;

    if json {
        let rendered = serde_json::to_string_pretty(&view)
            .map_err(|err| AppError::Io(io::Error::new(io::ErrorKind::Other, err)))?;
        println!("{rendered}");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    render_state(&mut stdout, &view)?;

    if view.status == DecisionStatus::Complete {
        let summary = service.summary_for(&answers, problem.as_deref().unwrap_or_default())?;
        writeln!(stdout, "\n{summary}")?;
    }

    Ok(())
}

/// Repeating a factor on the command line is rejected rather than letting
/// the last value win.
pub(crate) fn collect_answer_args(
    pairs: Vec<(Factor, Answer)>,
) -> Result<AnswerSet, DecisionServiceError> {
    Ok(AnswerSet::from_pairs(pairs)?)
}

pub(crate) fn run_walk(args: WalkArgs, config: &AppConfig) -> Result<(), AppError> {
    let WalkArgs { problem, export } = args;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let mut session = DecisionSession::new();
    match problem {
        Some(problem) => session.set_problem(problem),
        None => {
            write!(output, "What decision are you facing? (one sentence) > ")?;
            output.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            session.set_problem(line.trim());
        }
    }

    if walk_session(&mut session, &mut input, &mut output)? == WalkOutcome::Abandoned {
        writeln!(output, "\nNo recommendation yet. Run `walk` again to continue.")?;
        return Ok(());
    }

    let Some(summary) = session.summary() else {
        return Ok(());
    };
    drop(output);

    let target = export.or_else(|| config.export.summary_path.clone());
    deliver_summary(target.as_deref(), &summary);

    Ok(())
}

/// Writes to the export file with stdout as fallback, or straight to stdout
/// when no file is configured.
pub(crate) fn deliver_summary(target: Option<&Path>, summary: &str) -> ExportOutcome {
    match target {
        Some(path) => {
            let outcome = export_summary(&FileSink::new(path), &StdoutSink, summary);
            if outcome == ExportOutcome::Delivered {
                println!("\nSummary copied to {}", path.display());
            }
            outcome
        }
        None => match StdoutSink.write(summary) {
            Ok(()) => ExportOutcome::Delivered,
            Err(err) => {
                tracing::warn!(error = %err, "summary could not be written");
                ExportOutcome::Dropped
            }
        },
    }
}

/// Drives the question loop until a style is recommended or the user quits.
pub(crate) fn walk_session<R, W>(
    session: &mut DecisionSession,
    input: &mut R,
    output: &mut W,
) -> Result<WalkOutcome, AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        let (next, path) = match session.resolution() {
            Resolution::Complete { style, path } => {
                writeln!(output, "\nRecommended process: {}", style.title())?;
                writeln!(output, "{}", style.subtitle())?;
                writeln!(output, "{}", style.details())?;
                writeln!(output, "Path taken: {path}")?;
                return Ok(WalkOutcome::Completed(style));
            }
            Resolution::StructurallyInvalid { message } => {
                return Err(DecisionServiceError::InvalidTree(message).into());
            }
            Resolution::Incomplete { next, path } => (next, path),
        };

        if !path.is_empty() {
            writeln!(output, "\nSo far: {path}")?;
        }
        writeln!(output, "\n{} ({})", next.label(), next.code())?;
        writeln!(output, "{}", next.help())?;
        write!(output, "[h]igh / [l]ow / back / reset / quit > ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(WalkOutcome::Abandoned);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(WalkOutcome::Abandoned),
            "b" | "back" => {
                session.undo();
            }
            "reset" => {
                let problem = session.problem().to_string();
                session.reset();
                session.set_problem(problem);
            }
            choice => match choice.parse::<Answer>() {
                Ok(value) => {
                    session.answer(next, Some(value));
                }
                Err(err) => writeln!(output, "{err}")?,
            },
        }
    }
}

pub(crate) fn render_state<W: Write>(output: &mut W, view: &DecisionStateView) -> io::Result<()> {
    writeln!(output, "Questions")?;
    for question in &view.questions {
        let answer = match question.value {
            Some(value) => value.label(),
            None if question.pending => "(next)",
            None => "-",
        };
        writeln!(
            output,
            "- {} ({}): {}",
            question.label, question.factor, answer
        )?;
    }

    match (&view.result, view.next_question) {
        (Some(style), _) => {
            writeln!(output, "\nRecommended process: {}", style.title)?;
            writeln!(output, "{}", style.subtitle)?;
            writeln!(output, "{}", style.details)?;
        }
        (None, Some(next)) => {
            writeln!(output, "\nStatus: incomplete, next question {} ({})", next.label(), next)?;
        }
        (None, None) => {}
    }

    Ok(())
}

pub(crate) fn run_catalog() {
    println!("Factors");
    for factor in Factor::ordered() {
        println!("- {} {}: {}", factor.code(), factor.label(), factor.help());
    }

    println!("\nDecision styles");
    for style in Style::ordered() {
        println!("- {} {}: {}", style.code(), style.title(), style.subtitle());
    }
}
