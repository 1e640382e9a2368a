use std::{env, path::PathBuf, process};

use category_combo::{
    catalog::CategoryCatalog,
    cli::{
        output::{self, OutputPreferences},
        ui::{paint, UiStyle},
        PickOutcome, PickerSession,
    },
    config::{ConfigManager, PickerConfig},
    domain::{Displayable, TransactionType},
    form::TransactionForm,
    init,
    selector::CategorySelector,
};

struct Invocation {
    transaction_type: Option<TransactionType>,
    positional: Vec<String>,
}

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let invocation = parse_invocation(args);
    let config = ConfigManager::new()?.load()?;
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_mode,
        quiet_mode: false,
    });
    let transaction_type = invocation
        .transaction_type
        .unwrap_or(config.default_transaction_type);

    match command.as_str() {
        "pick" => {
            let mut catalog = load_catalog(invocation.positional.first(), &config)?;
            let mut form = TransactionForm::new(transaction_type);
            form.set_categories(catalog.list().to_vec());

            let outcome = PickerSession::new(&mut form, &mut catalog, &config).run()?;
            match outcome {
                PickOutcome::Picked(category) => output::success(format!(
                    "Selected category: {} [id {}]",
                    category.display_label(),
                    category.category_id
                )),
                PickOutcome::Escaped => output::info("No category selected."),
            }
        }
        "filter" => {
            let Some(query) = invocation.positional.first() else {
                print_usage();
                process::exit(1);
            };
            let catalog = load_catalog(invocation.positional.get(1), &config)?;
            let mut form = TransactionForm::new(transaction_type);
            form.set_categories(catalog.list().to_vec());

            let mut selector = CategorySelector::new();
            selector.input(query.as_str());
            let painted = paint(
                &selector.view(&form, &config.placeholder),
                &UiStyle::plain(),
            );
            for line in painted.lines.iter().skip(1) {
                println!("{line}");
            }
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn parse_invocation(args: impl Iterator<Item = String>) -> Invocation {
    let mut invocation = Invocation {
        transaction_type: None,
        positional: Vec::new(),
    };
    for arg in args {
        match arg.as_str() {
            "--income" => invocation.transaction_type = Some(TransactionType::Income),
            "--expense" => invocation.transaction_type = Some(TransactionType::Expense),
            _ => invocation.positional.push(arg),
        }
    }
    invocation
}

fn load_catalog(
    explicit: Option<&String>,
    config: &PickerConfig,
) -> Result<CategoryCatalog, Box<dyn std::error::Error>> {
    let path = explicit
        .map(PathBuf::from)
        .or_else(|| config.catalog_path.clone());
    Ok(match path {
        Some(path) => CategoryCatalog::load(&path)?,
        None => CategoryCatalog::default(),
    })
}

fn print_usage() {
    eprintln!(
        "Usage: category_combo_cli <command>\n\
         Commands:\n  \
         pick [--income|--expense] [categories.json]\n  \
         filter <query> [--income|--expense] [categories.json]"
    );
}
