use clap::Args;
use formflow::config::AppConfig;
use formflow::error::AppError;
use formflow::forms::{rule_table, FormKind, JsonFileStore, Submission, SubmissionRepository};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Submissions file to read (defaults to APP_SUBMISSIONS_PATH or submissions.json)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
    /// Emit CSV instead of a human-readable listing
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Form variant to describe (defaults to APP_FORM or registration)
    #[arg(long)]
    pub(crate) form: Option<FormKind>,
}

pub(crate) fn run_list_submissions(args: ListArgs) -> Result<(), AppError> {
    let path = match args.path {
        Some(path) => path,
        None => AppConfig::load()?.form.submissions_path,
    };

    let store = JsonFileStore::open(&path);
    let submissions = store.list();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.csv {
        write_csv(&mut out, &submissions).map_err(io::Error::from)?;
    } else {
        render_listing(&mut out, &path, &submissions)?;
    }
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let kind = match args.form {
        Some(kind) => kind,
        None => AppConfig::load()?.form.kind,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_rules(&mut out, kind)?;
    Ok(())
}

fn render_listing<W: Write>(
    out: &mut W,
    path: &std::path::Path,
    submissions: &[Submission],
) -> io::Result<()> {
    writeln!(out, "Submissions in {}", path.display())?;
    if submissions.is_empty() {
        writeln!(out, "No submissions yet.")?;
        return Ok(());
    }

    for (index, submission) in submissions.iter().enumerate() {
        let hobbies = if submission.hobbies.is_empty() {
            "none".to_string()
        } else {
            submission.hobbies.join(", ")
        };
        writeln!(
            out,
            "{:>3}. {} <{}> | {} | {} | hobbies: {} | submitted {}",
            index + 1,
            submission.fullname,
            submission.email,
            submission.gender.label(),
            submission.city,
            hobbies,
            submission.submitted_at.to_rfc3339()
        )?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: W, submissions: &[Submission]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "fullname",
        "email",
        "gender",
        "hobbies",
        "city",
        "agreed",
        "submittedAt",
    ])?;
    for submission in submissions {
        writer.write_record([
            submission.fullname.as_str(),
            submission.email.as_str(),
            submission.gender.value(),
            submission.hobbies.join(";").as_str(),
            submission.city.as_str(),
            if submission.agreed { "true" } else { "false" },
            submission.submitted_at.to_rfc3339().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn render_rules<W: Write>(out: &mut W, kind: FormKind) -> io::Result<()> {
    writeln!(out, "Rules for the {kind} form")?;
    for rule in rule_table(kind) {
        writeln!(out, "- {:<26} {:<16} {}", rule.id, rule.field, rule.message)?;
    }
    Ok(())
}
