use crate::infra::{build_engine, engine_config, parse_mode, parse_safe_code};
use clap::Args;
use safe_route::assessment::{
    Assessment, AssessmentRequest, AssessmentResponse, RiskEngine, SafeCode, TransportMode,
    UserInfo, UserRiskProfile,
};
use safe_route::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Starting location (defaults to the configured current location)
    #[arg(long)]
    pub(crate) origin: Option<String>,
    /// Destination location
    #[arg(long)]
    pub(crate) destination: String,
    /// Traveller age in years
    #[arg(long, default_value_t = 30)]
    pub(crate) age: u32,
    /// Traveller is not vaccinated
    #[arg(long)]
    pub(crate) unvaccinated: bool,
    /// Traveller has a pre-existing condition
    #[arg(long)]
    pub(crate) preexisting: bool,
    /// Self-reported safe code (green, yellow, red)
    #[arg(long, default_value = "green", value_parser = parse_safe_code)]
    pub(crate) safe_code: SafeCode,
    /// Transportation mode (public, private, or any other label)
    #[arg(long, default_value = "public", value_parser = parse_mode)]
    pub(crate) mode: TransportMode,
    /// Override the route risk weight of the classifier
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) route_weight: Option<f64>,
    /// Override the personal risk weight of the classifier
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) personal_weight: Option<f64>,
    /// Override the classifier bias
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) bias: Option<f64>,
    /// Graph document to load instead of the configured one
    #[arg(long)]
    pub(crate) graph: Option<PathBuf>,
    /// Print the JSON response body instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LocationsArgs {
    /// Only list destinations offered from this origin
    #[arg(long)]
    pub(crate) from: Option<String>,
    /// Graph document to load instead of the configured one
    #[arg(long)]
    pub(crate) graph: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Graph document to load instead of the configured one
    #[arg(long)]
    pub(crate) graph: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = engine_config(args.graph.clone())?;
    let engine = build_engine(&config)?;
    let origin = args
        .origin
        .clone()
        .unwrap_or_else(|| config.default_origin.clone());

    let request = assess_request(origin, &args, &engine);
    let validated = request.validate()?;
    let assessment = validated.assess(&engine);

    if args.json {
        let response = AssessmentResponse::from_assessment(assessment, true);
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!(
        "Journey assessment: {} -> {}",
        validated.origin, validated.destination
    );
    render_assessment(&assessment);
    Ok(())
}

fn assess_request(origin: String, args: &AssessArgs, engine: &RiskEngine) -> AssessmentRequest {
    let base = engine.model();
    let weights = match (args.route_weight, args.personal_weight) {
        (None, None) => None,
        (route, personal) => Some([
            route.unwrap_or(base.weights[0]),
            personal.unwrap_or(base.weights[1]),
        ]),
    };

    AssessmentRequest {
        origin,
        destination: args.destination.clone(),
        user_info: UserInfo {
            age: Some(args.age),
            vaccinated: Some(!args.unvaccinated),
            has_preexisting: Some(args.preexisting),
            safe_code: Some(args.safe_code),
            transportation_mode: Some(args.mode.clone()),
        },
        weights,
        bias: args.bias,
        include_breakdown: true,
    }
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), AppError> {
    let config = engine_config(args.graph)?;
    let engine = build_engine(&config)?;
    let graph = engine.graph();

    match args.from {
        Some(origin) => {
            if !graph.contains(&origin) {
                println!("Unknown origin '{origin}', listing every location");
            }
            println!("Destinations from {origin}");
            for name in graph.destination_options(&origin) {
                println!("- {name}");
            }
        }
        None => {
            println!("Known locations");
            for name in graph.locations() {
                println!("- {} (risk {:.2})", name, graph.risk_weight(name));
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = engine_config(args.graph)?;
    let engine = build_engine(&config)?;
    let model = engine.model();

    println!("Route risk demo");
    println!(
        "Model: route weight {:.2}, personal weight {:.2}, bias {:.2}",
        model.weights[0], model.weights[1], model.bias
    );

    for journey in demo_journeys(&config.default_origin) {
        let assessment = engine.assess(&journey.origin, &journey.destination, &journey.profile);
        println!(
            "\n{}: {} -> {}",
            journey.label, journey.origin, journey.destination
        );
        render_assessment(&assessment);
    }

    Ok(())
}

struct DemoJourney {
    label: &'static str,
    origin: String,
    destination: String,
    profile: UserRiskProfile,
}

fn demo_journeys(default_origin: &str) -> Vec<DemoJourney> {
    let commuter = UserRiskProfile::default();
    vec![
        DemoJourney {
            label: "Vaccinated commuter",
            origin: default_origin.to_string(),
            destination: "HKU".to_string(),
            profile: commuter.clone(),
        },
        DemoJourney {
            label: "Driver to the museum",
            origin: "New Town Plaza".to_string(),
            destination: "Hong Kong Museum of Art".to_string(),
            profile: UserRiskProfile {
                transportation_mode: TransportMode::Private,
                ..commuter.clone()
            },
        },
        DemoJourney {
            label: "Unvaccinated senior flying out",
            origin: default_origin.to_string(),
            destination: "International Airport".to_string(),
            profile: UserRiskProfile {
                age: 68,
                vaccinated: false,
                has_preexisting: true,
                ..commuter.clone()
            },
        },
        DemoJourney {
            label: "Yellow code at the harbour",
            origin: "Central".to_string(),
            destination: "Victoria Harbor".to_string(),
            profile: UserRiskProfile {
                safe_code: SafeCode::Yellow,
                ..commuter.clone()
            },
        },
        DemoJourney {
            label: "Red code traveller",
            origin: default_origin.to_string(),
            destination: "Central".to_string(),
            profile: UserRiskProfile {
                safe_code: SafeCode::Red,
                ..commuter
            },
        },
    ]
}

pub(crate) fn render_assessment(assessment: &Assessment) {
    println!(
        "- Risk level: {} ({:.1}% probability)",
        assessment.risk_level.label().to_ascii_uppercase(),
        assessment.probability * 100.0
    );

    if assessment.path.is_empty() {
        println!("- Path: none");
    } else {
        println!("- Path: {}", assessment.path.join(" -> "));
    }

    let breakdown = &assessment.breakdown;
    if breakdown.red_code_override {
        println!("- Red safe code: route scoring skipped");
        return;
    }

    if let (Some(route), Some(multiplier)) =
        (breakdown.route_risk, breakdown.transport_multiplier)
    {
        println!("- Route risk: {route:.3} (transport x{multiplier:.1})");
    }
    if let Some(personal) = breakdown.personal_risk {
        println!("- Personal risk: {personal:.3}");
    }
    if let Some(score) = breakdown.score {
        println!("- Linear score: {score:.3}");
    }
}
