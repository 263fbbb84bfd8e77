mod display;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use informativos_core::{ExplodedRow, GeneralRepercussion, first_row_per_id, unique_ids};
use informativos_query::{
    FilterOptions, FilterSpec, SampleStatus, apply_filters, sample_study_goal, stats, summarize,
};
use informativos_session::SessionState;
use informativos_store::Dataset;

#[derive(Parser)]
#[command(name = "informativos", version, about = "Consulta, filtros e metas de estudo sobre informativos do STF")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the dataset and print its size summary.
    Summary {
        /// Path to the dataset CSV.
        data: PathBuf,
    },
    /// List filtered julgados as cards, a table, or JSON.
    List {
        data: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// Maximum number of cards to render.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, value_enum, default_value = "cards")]
        format: OutputFormat,
    },
    /// Show the distinct values available for each filter dimension.
    Options {
        data: PathBuf,
    },
    /// Aggregate counts by branch, study area, year, and repercussão geral.
    Stats {
        data: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Draw a random study goal from the filtered julgados.
    Study {
        data: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// How many julgados to draw.
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Cards,
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum RgArg {
    Sim,
    Nao,
    NaoInformado,
}

impl From<RgArg> for GeneralRepercussion {
    fn from(arg: RgArg) -> Self {
        match arg {
            RgArg::Sim => Self::Yes,
            RgArg::Nao => Self::No,
            RgArg::NaoInformado => Self::NotInformed,
        }
    }
}

/// Sidebar filters, one flag per dimension; repeatable flags build the
/// selection sets.
#[derive(Args)]
struct FilterArgs {
    /// Keep julgados judged in this year (repeatable).
    #[arg(long = "year")]
    years: Vec<i32>,
    /// Keep julgados judged in this YYYY-MM; switches the date filter to
    /// month mode (repeatable).
    #[arg(long = "year-month")]
    year_months: Vec<String>,
    /// Keep julgados in this study area (repeatable).
    #[arg(long = "area")]
    areas: Vec<String>,
    /// Keep julgados tagged with this legal branch (repeatable).
    #[arg(long = "branch")]
    branches: Vec<String>,
    /// Keep julgados of this process class (repeatable).
    #[arg(long = "class")]
    classes: Vec<String>,
    /// Keep only this bulletin number.
    #[arg(long)]
    bulletin: Option<String>,
    /// Keep only this repercussão geral value.
    #[arg(long, value_enum)]
    rg: Option<RgArg>,
    /// Mark these ids as session favorites (repeatable).
    #[arg(long = "favorite")]
    favorites: Vec<String>,
    /// Keep only favorited julgados.
    #[arg(long)]
    favorites_only: bool,
    /// Free-text search over título, tese, and resumo.
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn session(&self) -> SessionState {
        let mut session = SessionState::new();
        for id in &self.favorites {
            session.toggle_favorite(id);
        }
        session
    }

    fn spec(&self, session: &SessionState) -> FilterSpec {
        FilterSpec {
            date_mode: if self.year_months.is_empty() {
                informativos_query::DateMode::ByYear
            } else {
                informativos_query::DateMode::ByYearMonth
            },
            years: self.years.iter().copied().collect(),
            year_months: self.year_months.iter().cloned().collect(),
            study_areas: self.areas.iter().cloned().collect(),
            legal_branches: self.branches.iter().cloned().collect(),
            process_classes: self.classes.iter().cloned().collect(),
            bulletin_number: self.bulletin.clone(),
            general_repercussion: self.rg.map(Into::into),
            favorites_only: self.favorites_only,
            favorites: session.favorites().clone(),
            search_text: self.search.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("informativos v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    match cli.command {
        Command::Summary { data } => cmd_summary(&data),
        Command::List {
            data,
            filters,
            limit,
            format,
        } => cmd_list(&data, &filters, limit, format),
        Command::Options { data } => cmd_options(&data),
        Command::Stats { data, filters } => cmd_stats(&data, &filters),
        Command::Study {
            data,
            filters,
            count,
        } => cmd_study(&data, &filters, count),
    }
}

fn load(data: &Path) -> anyhow::Result<Dataset> {
    Dataset::load(data).with_context(|| format!("loading dataset from {}", data.display()))
}

fn print_view_summary(rows: &[ExplodedRow]) {
    let summary = summarize(rows);
    println!(
        "{} julgados únicos ({} linhas/ramos).",
        summary.unique_count, summary.row_count
    );
}

fn cmd_summary(data: &Path) -> anyhow::Result<()> {
    let dataset = load(data)?;
    println!(
        "{} julgados únicos ({} linhas/ramos) carregados.",
        dataset.unique_count(),
        dataset.row_count()
    );
    Ok(())
}

fn cmd_list(
    data: &Path,
    filters: &FilterArgs,
    limit: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let dataset = load(data)?;
    let session = filters.session();
    let filtered = apply_filters(dataset.rows(), &filters.spec(&session));
    print_view_summary(&filtered);

    match format {
        OutputFormat::Cards => {
            let unique = first_row_per_id(&filtered);
            if unique.is_empty() {
                println!("Nenhum informativo encontrado com os filtros aplicados.");
                return Ok(());
            }
            for row in unique.iter().take(limit) {
                println!("{}", display::format_card(row, &filtered, session.is_favorite(&row.id)));
            }
            if unique.len() > limit {
                println!(
                    "Mostrando os primeiros {} de {} julgados únicos.",
                    limit,
                    unique.len()
                );
            }
        }
        OutputFormat::Table => {
            if filtered.is_empty() {
                println!("Nenhum informativo encontrado com os filtros aplicados.");
                return Ok(());
            }
            print!("{}", display::format_table(&filtered));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
    }
    Ok(())
}

fn cmd_options(data: &Path) -> anyhow::Result<()> {
    let dataset = load(data)?;
    let options = FilterOptions::from_rows(dataset.rows());

    let list = |header: &str, values: &[String]| {
        println!("{header}");
        if values.is_empty() {
            println!("  (sem dados)");
        }
        for value in values {
            println!("  {value}");
        }
        println!();
    };

    let years: Vec<String> = options.years.iter().map(|y| y.to_string()).collect();
    list("Anos", &years);
    list("Meses/Anos", &options.year_months);
    list("Ramos do Direito", &options.legal_branches);
    list("Áreas de Estudo", &options.study_areas);
    list("Classes Processuais", &options.process_classes);
    list("Informativos", &options.bulletin_numbers);
    Ok(())
}

fn cmd_stats(data: &Path, filters: &FilterArgs) -> anyhow::Result<()> {
    let dataset = load(data)?;
    let session = filters.session();
    let filtered = apply_filters(dataset.rows(), &filters.spec(&session));
    print_view_summary(&filtered);
    println!();

    print!(
        "{}",
        display::format_counts("Por Ramo do Direito (linhas)", &stats::counts_by_branch(&filtered))
    );
    println!();
    print!(
        "{}",
        display::format_counts("Por Área de Estudo (linhas)", &stats::counts_by_area(&filtered))
    );
    println!();
    print!(
        "{}",
        display::format_counts("Por Ano (julgados únicos)", &stats::counts_by_year(&filtered))
    );
    println!();
    print!(
        "{}",
        display::format_counts(
            "Por Repercussão Geral (julgados únicos)",
            &stats::counts_by_repercussion(&filtered)
        )
    );
    Ok(())
}

fn cmd_study(data: &Path, filters: &FilterArgs, count: usize) -> anyhow::Result<()> {
    let dataset = load(data)?;
    let mut session = filters.session();
    let filtered = apply_filters(dataset.rows(), &filters.spec(&session));

    let available = unique_ids(&filtered);
    let (sampled, status) = sample_study_goal(&available, count);
    match status {
        SampleStatus::Full => {}
        SampleStatus::Partial => println!(
            "Não há {} julgados únicos disponíveis. Mostrando {}.",
            count,
            sampled.len()
        ),
        SampleStatus::Empty => {
            println!("Nenhum julgado disponível com os filtros atuais para gerar a meta.");
            return Ok(());
        }
    }

    session.set_study_goal(sampled);
    session.prune_selections(&unique_ids(dataset.rows()).into_iter().collect::<HashSet<_>>());

    println!("Meta de leitura: {} julgados.\n", session.study_goal().len());
    // Goal cards render from the full dataset, not the filtered view, so a
    // goal drawn under one filter stays readable after the filter changes.
    for id in session.study_goal() {
        if let Some(row) = dataset.rows().iter().find(|r| &r.id == id) {
            println!(
                "{}",
                display::format_card(row, dataset.rows(), session.is_favorite(id))
            );
        }
    }
    Ok(())
}
