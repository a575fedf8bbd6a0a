/*
Author      : Seunghwan Shin
Create date : 2025-09-00
Description : SQLite / Excel 게시글 데이터를 날짜별, 지역별로 집계해 차트(PNG)와 성별 지도(HTML)로 저장한다.

History     : 2025-09-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;
use env_configuration::env_config::*;

mod errors;

mod enums;

mod dto;

mod traits;

mod model;
use model::{chart_style::*, configs::total_config::*};

mod repository;

mod utils_modules;
use utils_modules::{font_utils::*, logger_utils::*};

mod service;
use service::{aggregation_service_impl::*, chart_service_impl::*, map_service_impl::*};

mod controller;
use controller::main_controller::*;

fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();

    let _logger_handle = match set_global_logger(&LOG_DIRECTORY) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("[main] Failed to initialize logger: {:?}", e);
            std::process::exit(1);
        }
    };

    info!("Region post chart program start!");

    let total_config: TotalConfig = TotalConfig::load(&CHART_CONFIG_PATH).unwrap_or_else(|e| {
        error!("[main] An issue occurred while loading the chart configuration. {:?}", e);
        std::process::exit(1)
    });

    /* 폰트는 실행당 한 번만 확인 */
    let font_choice: FontChoice = load_font(total_config.font());
    match &font_choice {
        FontChoice::Preferred { family, path } => {
            info!("Using font '{}' from {:?}", family, path);
        }
        FontChoice::Fallback(reason) => {
            info!(
                "Preferred font unavailable ({}), falling back to '{}'",
                reason,
                font_choice.family()
            );

            match register_fallback_font(total_config.font()) {
                Some(path) => info!("Fallback font loaded from {:?}", path),
                None => warn!(
                    "No fallback font could be loaded from {:?}; chart text cannot be drawn",
                    total_config.font().fallback_paths()
                ),
            }
        }
    }

    let chart_style: ChartStyle = total_config
        .style()
        .to_chart_style(font_choice.family())
        .unwrap_or_else(|e| {
            error!("[main] Invalid chart style configuration. {:?}", e);
            std::process::exit(1)
        });

    /* 의존 주입 */
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(chart_style);
    let map_service: MapServiceImpl = MapServiceImpl::new(total_config.map().clone());

    let main_controller: MainController<AggregationServiceImpl, ChartServiceImpl, MapServiceImpl> =
        MainController::new(
            aggregation_service,
            chart_service,
            map_service,
            total_config.system().clone(),
            total_config.jobs().clone(),
        );

    match main_controller.main_task() {
        Ok(()) => info!("All chart jobs finished."),
        Err(e) => {
            error!("{:?}", e);
            std::process::exit(1);
        }
    }
}
