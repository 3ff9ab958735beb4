// src/main.rs
//
// Calculatrice entière — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// NATIF :
//   (rien)           fenêtre eframe
//   --console        boucle de lecture sur stdin/stdout
//   --expr "2+3*4"   évaluation unique, code de sortie 1 en cas d’erreur
//   RUST_LOG=debug   trace jetons/RPN (env_logger)
//
// WEB (wasm32) : eframe::WebRunner sur <canvas id="calculatrice_canvas">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod console;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
pub(crate) const TITRE_APP: &str = "Calculatrice entière";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use log::{error, info};

    use super::{console, egui, noyau, AppCalc, TITRE_APP};

    /// Calculatrice entière : + - * / ^ et parenthèses
    #[derive(Parser, Debug)]
    #[command(name = "calculatrice")]
    #[command(about = "Évalue des expressions entières", long_about = None)]
    pub struct Args {
        /// Boucle de lecture en terminal (au lieu de la fenêtre)
        #[arg(long, conflicts_with = "expr")]
        pub console: bool,

        /// Expression à évaluer une seule fois
        #[arg(long)]
        pub expr: Option<String>,
    }

    pub fn une_fois(expr: &str) -> ExitCode {
        match noyau::run(expr.trim()) {
            Ok(v) => {
                println!("{v}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Erreur : {e}");
                ExitCode::FAILURE
            }
        }
    }

    pub fn fenetre() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([420.0, 600.0])
                .with_min_inner_size([360.0, 480.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        let args = Args::parse();

        if let Some(expr) = args.expr.as_deref() {
            info!("mode: évaluation unique");
            return une_fois(expr);
        }

        if args.console {
            info!("mode: console");
            return match console::lancer() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("console: {e}");
                    ExitCode::FAILURE
                }
            };
        }

        info!("mode: fenêtre");
        match fenetre() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("fenêtre: {e}");
                ExitCode::FAILURE
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "calculatrice_canvas";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;
        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
