use serde_json::Value;

use form_adapters::wizards::{exhibition_plan, exhibition_wizard, feedback_plan, feedback_wizard, science_day_plan,
                             science_day_wizard, visitor_plan, visitor_wizard};
use form_adapters::InMemoryRegistry;
use form_core::{FieldValue, SubmitPlan, WizardEngine, WizardSchema};
use form_domain::Competition;

fn resolve_wizard(name: &str, competition: Option<&str>) -> Result<(WizardSchema, SubmitPlan), String> {
    match name {
        "exhibition" => Ok((exhibition_wizard(), exhibition_plan())),
        "visitor" => Ok((visitor_wizard(), visitor_plan())),
        "feedback" => Ok((feedback_wizard(), feedback_plan())),
        "science-day" => {
            let label = competition.ok_or("science-day requires --competition '<label>'")?;
            let competition = Competition::parse(label).map_err(|e| e.to_string())?;
            Ok((science_day_wizard(competition), science_day_plan(competition)))
        }
        other => Err(format!("unknown wizard: '{}' (expected exhibition|visitor|science-day|feedback)", other)),
    }
}

fn apply_answer(engine: &mut WizardEngine<form_core::InMemoryEventStore, form_core::InMemorySessionRepository>,
                id: &str,
                value: &Value)
                -> Result<(), String> {
    let field_value = match value {
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Array(items) => FieldValue::Many(items.iter()
                                                     .filter_map(|v| v.as_str().map(|s| s.to_string()))
                                                     .collect()),
        Value::String(s) => FieldValue::Text(s.clone()),
        other => FieldValue::Text(other.to_string()),
    };
    engine.set_field(id, field_value).map_err(|e| e.to_string())
}

async fn run_wizard(schema: WizardSchema, plan: SubmitPlan, answers: Value) -> Result<(), String> {
    let answers = answers.as_object().ok_or("answers file must contain a JSON object")?.clone();
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(schema).with_plan(plan);

    while !engine.is_submitted() {
        let idx = engine.cursor();
        let step = engine.current_step().clone();
        for field in &step.fields {
            if let Some(value) = answers.get(&field.id) {
                apply_answer(&mut engine, &field.id, value)?;
            }
        }

        let terminal = idx == engine.schema().last_index();
        let outcome = if terminal {
            engine.submit(&registry).await.map(Some)
        } else if engine.plan().step(idx).is_some() {
            engine.submit_step(&registry).await.map(Some)
        } else {
            engine.advance().map(|_| None)
        };

        match outcome {
            Ok(Some(record)) => println!("submitted: step {} -> record id {:?}", idx, record.id),
            Ok(None) => println!("step {} ({}) done", idx, step.title),
            Err(e) => {
                for (field, message) in engine.form().errors() {
                    eprintln!("  {}: {}", field, message);
                }
                return Err(format!("stopped at step {} ({}): {}", idx, step.title, e));
            }
        }
    }

    println!("wizard completed; session fingerprint: {}", engine.session_fingerprint().unwrap_or_default());
    for endpoint in registry.endpoints() {
        for record in registry.records(&endpoint) {
            println!("{} #{}: {}", endpoint, record.id, record.body);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    // CLI mínima:
    //   form schema --wizard <name> [--competition <label>]
    //   form run --wizard <name> --answers <file.json> [--competition <label>]
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: form <schema|run> --wizard <name> [--answers <file.json>] [--competition <label>]");
        std::process::exit(2);
    }

    let mut wizard: Option<String> = None;
    let mut answers_path: Option<String> = None;
    let mut competition: Option<String> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--wizard" => {
                i += 1;
                if i < args.len() { wizard = Some(args[i].clone()); }
            }
            "--answers" => {
                i += 1;
                if i < args.len() { answers_path = Some(args[i].clone()); }
            }
            "--competition" => {
                i += 1;
                if i < args.len() { competition = Some(args[i].clone()); }
            }
            _ => {}
        }
        i += 1;
    }

    let Some(wizard_name) = wizard else {
        eprintln!("falta --wizard <name>");
        std::process::exit(2);
    };

    let (schema, plan) = match resolve_wizard(&wizard_name, competition.as_deref()) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    match args[1].as_str() {
        "schema" => match serde_json::to_string_pretty(&schema) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                eprintln!("error serializando schema: {}", e);
                std::process::exit(5);
            }
        },
        "run" => {
            let Some(path) = answers_path else {
                eprintln!("run requiere --answers <file.json>");
                std::process::exit(2);
            };
            let raw = match std::fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("no se pudo leer {}: {}", path, e);
                    std::process::exit(4);
                }
            };
            let answers: Value = match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("answers inválido: {}", e);
                    std::process::exit(3);
                }
            };
            if let Err(e) = run_wizard(schema, plan, answers).await {
                eprintln!("error: {}", e);
                std::process::exit(4);
            }
        }
        other => {
            eprintln!("subcomando desconocido: '{}' (use schema|run)", other);
            std::process::exit(2);
        }
    }
}
