use crate::common::*;

use crate::dto::{daily_count::*, daily_region_counts::*, region_count::*, region_share::*};
use crate::model::chart_style::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{io_utils::*, time_utils::*, traits::*};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/* 꺾은선 차트에서 값 라벨을 붙이는 간격 (n 번째 점마다) */
const LINE_LABEL_EVERY: usize = 3;

/* 날짜 하나에 할당되는 막대 묶음 전체 폭 */
const BAR_GROUP_WIDTH: f64 = 0.8;

const TOTAL_SERIES_LABEL: &str = "总帖子数";
const DATE_AXIS_LABEL: &str = "日期";
const POSTS_AXIS_LABEL: &str = "帖子数量";
const REGION_AXIS_LABEL: &str = "地区";
const VOLUME_AXIS_LABEL: &str = "数据量";
const NO_DATA_MESSAGE: &str = "暂无数据";

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

#[doc = "y 축 눈금 라벨 - 정수 눈금만 천 단위 구분자로 표시"]
fn format_axis_count(value: f64) -> String {
    if value < 0.0 || (value - value.round()).abs() > 1e-6 {
        return String::new();
    }

    (value.round() as u64).to_formatted_string(&Locale::en)
}

#[doc = "정수 위치의 x 눈금에만 카테고리 라벨을 붙인다"]
fn category_label(labels: &[String], x: f64) -> String {
    let idx: f64 = x.round();

    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }

    labels.get(idx as usize).cloned().unwrap_or_default()
}

#[doc = "최대값에 여유(headroom 배율)를 준 y 축 상한 - 최소 1"]
fn y_axis_max(max_value: u64, headroom: f64) -> f64 {
    (max_value as f64 * headroom).max(1.0)
}

#[doc = r#"
    묶음 막대 차트에서 date_idx 번째 날짜 묶음의 slot_idx 번째 막대의 x 구간.

    날짜 묶음은 정수 위치 date_idx 를 중심으로 `BAR_GROUP_WIDTH` 폭을 가지며 slot_count 칸으로 나뉜다.
"#]
fn grouped_bar_span(date_idx: usize, slot_idx: usize, slot_count: usize) -> (f64, f64) {
    let single_width: f64 = BAR_GROUP_WIDTH / slot_count.max(1) as f64;
    let left: f64 = date_idx as f64 - BAR_GROUP_WIDTH / 2.0 + slot_idx as f64 * single_width;

    (left, left + single_width)
}

#[derive(Debug, Clone, PartialEq)]
struct BarSlot {
    region_idx: usize,
    left: f64,
    right: f64,
    value: u64,
}

#[doc = r#"
    날짜 × 지역 집계 행(`rows()`)을 막대 위치로 배치한다.

    - dense : 모든 날짜 묶음이 지역 수만큼 칸을 가지며 0 건 지역도 자리를 차지한다
    - sparse : 각 날짜 묶음은 그 날 관측된 지역만으로 폭을 나눈다

    막대 색상은 날짜와 무관하게 `regions` 순서(region_idx)를 따른다.
"#]
fn grouped_bar_slots(counts: &DailyRegionCounts) -> Vec<BarSlot> {
    let rows: Vec<DailyRegionCount> = counts.rows();
    let mut slots: Vec<BarSlot> = Vec::with_capacity(rows.len());

    for (date_idx, date) in counts.dates().iter().enumerate() {
        let day_rows: Vec<&DailyRegionCount> = rows.iter().filter(|row| row.date == *date).collect();

        let slot_count: usize = if *counts.dense() {
            counts.regions().len()
        } else {
            day_rows.len()
        };

        for (slot_idx, row) in day_rows.iter().enumerate() {
            let region_idx: usize = counts
                .regions()
                .iter()
                .position(|region| *region == row.region)
                .unwrap_or(slot_idx);

            let (left, right) = grouped_bar_span(date_idx, slot_idx, slot_count);

            slots.push(BarSlot {
                region_idx,
                left,
                right,
                value: row.count,
            });
        }
    }

    slots
}

#[doc = r#"
    원형 차트 조각들의 (시작각, 끝각) - 단위는 도(degree).

    12시 방향(90도)에서 시작해 시계 방향(각도 감소)으로 진행한다.
"#]
fn pie_slice_angles(percentages: &[f64]) -> Vec<(f64, f64)> {
    let mut start: f64 = 90.0;

    percentages
        .iter()
        .map(|pct| {
            let end: f64 = start - pct / 100.0 * 360.0;
            let slice: (f64, f64) = (start, end);
            start = end;
            slice
        })
        .collect()
}

#[doc = "중심/반지름/각도(도)를 픽셀 좌표로 변환 (y 축은 아래 방향)"]
fn polar_to_pixel(center: (i32, i32), radius: f64, degrees: f64) -> (i32, i32) {
    let rad: f64 = degrees.to_radians();

    (
        center.0 + (radius * rad.cos()).round() as i32,
        center.1 - (radius * rad.sin()).round() as i32,
    )
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    style: ChartStyle,
}

impl ChartServiceImpl {
    fn font(&self, size: u32) -> TextStyle<'_> {
        (self.style.font_family().as_str(), size)
            .into_font()
            .color(&rgb(*self.style.text_color()))
    }

    fn centered_font(&self, size: u32) -> TextStyle<'_> {
        self.font(size).pos(Pos::new(HPos::Center, VPos::Center))
    }

    fn bottom_centered_font(&self, size: u32) -> TextStyle<'_> {
        self.font(size).pos(Pos::new(HPos::Center, VPos::Bottom))
    }

    fn prepare_output(&self, output_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = output_path.parent() {
            ensure_dir(parent)?;
        }
        Ok(())
    }

    #[doc = "집계 결과가 비어 있을 때 제목과 안내 문구만 있는 차트를 저장"]
    fn draw_empty_chart(&self, title: &str, output_path: &Path) -> anyhow::Result<()> {
        let root = BitMapBackend::new(output_path, *self.style.size()).into_drawing_area();
        root.fill(&rgb(*self.style.background()))?;

        let body = root.titled(title, self.font(40))?;
        let (w, h) = body.dim_in_pixel();

        body.draw(&Text::new(
            NO_DATA_MESSAGE,
            (w as i32 / 2, h as i32 / 2),
            self.centered_font(32),
        ))?;

        root.present()?;

        warn!("No rows to plot, saved empty chart: {:?}", output_path);

        Ok(())
    }

    #[doc = "막대 위 값 라벨 간격 (y 축 단위)"]
    fn label_offset(&self, y_max: f64) -> f64 {
        y_max * 0.01
    }
}

impl ChartService for ChartServiceImpl {
    fn render_daily_trend(
        &self,
        title: &str,
        daily: &[DailyCount],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.prepare_output(output_path)?;

        if daily.is_empty() {
            return self.draw_empty_chart(title, output_path);
        }

        let labels: Vec<String> = daily.iter().map(|row| format_date_label(&row.date)).collect();
        let y_max: f64 = y_axis_max(max_count(daily), 1.15);
        let line_color: RGBColor = rgb(self.style.series_color(0));

        let root = BitMapBackend::new(output_path, *self.style.size()).into_drawing_area();
        root.fill(&rgb(*self.style.background()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.font(40))
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5f64..(daily.len() as f64 - 0.5), 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc(DATE_AXIS_LABEL)
            .y_desc(POSTS_AXIS_LABEL)
            .x_labels(daily.len().min(15))
            .y_labels(10)
            .light_line_style(ShapeStyle::from(&rgb(*self.style.grid_color())).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&rgb(*self.style.grid_color())).stroke_width(1))
            .axis_desc_style(self.font(26))
            .label_style(self.font(18))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .y_label_formatter(&|y| format_axis_count(*y))
            .draw()?;

        chart.draw_series(LineSeries::new(
            daily
                .iter()
                .enumerate()
                .map(|(i, row)| (i as f64, row.count as f64)),
            ShapeStyle::from(&line_color).stroke_width(3),
        ))?;

        chart.draw_series(daily.iter().enumerate().map(|(i, row)| {
            Circle::new((i as f64, row.count as f64), 5, line_color.filled())
        }))?;

        let offset: f64 = self.label_offset(y_max) * 2.0;

        chart.draw_series(
            daily
                .iter()
                .enumerate()
                .filter(|(i, _)| i % LINE_LABEL_EVERY == 0)
                .map(|(i, row)| {
                    Text::new(
                        row.count.to_string(),
                        (i as f64, row.count as f64 + offset),
                        self.bottom_centered_font(18),
                    )
                }),
        )?;

        root.present()?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }

    fn render_region_counts(
        &self,
        title: &str,
        regions: &[RegionCount],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.prepare_output(output_path)?;

        if regions.is_empty() {
            return self.draw_empty_chart(title, output_path);
        }

        let labels: Vec<String> = regions.iter().map(|row| row.region.clone()).collect();
        let y_max: f64 = y_axis_max(max_count(regions), 1.1);
        let offset: f64 = self.label_offset(y_max);

        let root = BitMapBackend::new(output_path, *self.style.size()).into_drawing_area();
        root.fill(&rgb(*self.style.background()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.font(36))
            .margin(30)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.6f64..(regions.len() as f64 - 0.4), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(REGION_AXIS_LABEL)
            .y_desc(VOLUME_AXIS_LABEL)
            .x_labels(regions.len())
            .y_labels(10)
            .light_line_style(ShapeStyle::from(&rgb(*self.style.grid_color())).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&rgb(*self.style.grid_color())).stroke_width(1))
            .axis_desc_style(self.font(24))
            .label_style(self.font(20))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .y_label_formatter(&|y| format_axis_count(*y))
            .draw()?;

        chart.draw_series(regions.iter().enumerate().map(|(i, row)| {
            let center: f64 = i as f64;
            Rectangle::new(
                [
                    (center - BAR_GROUP_WIDTH / 2.0, 0.0),
                    (center + BAR_GROUP_WIDTH / 2.0, row.count as f64),
                ],
                rgb(self.style.series_color(i)).filled(),
            )
        }))?;

        chart.draw_series(regions.iter().enumerate().map(|(i, row)| {
            Text::new(
                row.count.to_string(),
                (i as f64, row.count as f64 + offset),
                self.bottom_centered_font(20),
            )
        }))?;

        root.present()?;

        info!("Bar chart generated successfully: {:?}", output_path);

        Ok(())
    }

    fn render_region_share(
        &self,
        title: &str,
        shares: &[RegionShare],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.prepare_output(output_path)?;

        if shares.is_empty() {
            return self.draw_empty_chart(title, output_path);
        }

        let root = BitMapBackend::new(output_path, *self.style.size()).into_drawing_area();
        root.fill(&rgb(*self.style.background()))?;

        let body = root.titled(title, self.font(40))?;
        let (w, h) = body.dim_in_pixel();

        /* 왼쪽 70% 에 원형 차트, 오른쪽에 범례 */
        let pie_width: i32 = (w as f64 * 0.7) as i32;
        let center: (i32, i32) = (pie_width / 2, h as i32 / 2);
        let radius: f64 = (pie_width.min(h as i32) as f64 / 2.0) * 0.85;

        let percentages: Vec<f64> = shares.iter().map(|share| share.percentage).collect();
        let angles: Vec<(f64, f64)> = pie_slice_angles(&percentages);

        for (i, (start, end)) in angles.iter().enumerate() {
            let color: RGBColor = rgb(self.style.series_color(i));

            let mut outline: Vec<(i32, i32)> = vec![center];
            let steps: usize = ((start - end).abs().ceil() as usize).max(1);
            for step in 0..=steps {
                let degrees: f64 = start - (start - end) * step as f64 / steps as f64;
                outline.push(polar_to_pixel(center, radius, degrees));
            }

            body.draw(&Polygon::new(outline.clone(), color.filled()))?;

            outline.push(center);
            body.draw(&PathElement::new(outline, WHITE.stroke_width(2)))?;
        }

        for (share, (start, end)) in shares.iter().zip(angles.iter()) {
            let label_at: (i32, i32) = polar_to_pixel(center, radius * 0.6, (start + end) / 2.0);
            body.draw(&Text::new(
                format!("{:.1}%", share.percentage),
                label_at,
                self.centered_font(24),
            ))?;
        }

        /* 범례: 테두리 + 제목 + 색상 박스/지역명 */
        let entry_height: i32 = 36;
        let legend_left: i32 = pie_width + 20;
        let legend_top: i32 = center.1 - (entry_height * (shares.len() as i32 + 1)) / 2;
        let legend_right: i32 = (w as i32 - 20).max(legend_left + 160);
        let legend_bottom: i32 = legend_top + entry_height * (shares.len() as i32 + 1) + 10;

        body.draw(&Rectangle::new(
            [(legend_left, legend_top), (legend_right, legend_bottom)],
            ShapeStyle::from(&RGBColor(128, 128, 128).mix(0.8)).stroke_width(1),
        ))?;

        body.draw(&Text::new(
            REGION_AXIS_LABEL,
            (legend_left + 14, legend_top + 10),
            self.font(26),
        ))?;

        for (i, share) in shares.iter().enumerate() {
            let y: i32 = legend_top + entry_height * (i as i32 + 1) + 8;

            body.draw(&Rectangle::new(
                [(legend_left + 14, y), (legend_left + 38, y + 22)],
                rgb(self.style.series_color(i)).filled(),
            ))?;

            body.draw(&Text::new(
                share.region.clone(),
                (legend_left + 48, y),
                self.font(22),
            ))?;
        }

        root.present()?;

        info!("Pie chart generated successfully: {:?}", output_path);

        Ok(())
    }

    fn render_daily_region_comparison(
        &self,
        title: &str,
        counts: &DailyRegionCounts,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.prepare_output(output_path)?;

        if counts.is_empty() {
            return self.draw_empty_chart(title, output_path);
        }

        let labels: Vec<String> = counts.dates().iter().map(format_date_label).collect();
        let totals: Vec<u64> = counts.daily_totals();
        let date_count: usize = counts.dates().len();

        let y_max: f64 = y_axis_max(totals.iter().copied().max().unwrap_or(0), 1.15);
        let offset: f64 = self.label_offset(y_max);
        let total_color: RGBColor = rgb(*self.style.total_line_color());

        let root = BitMapBackend::new(output_path, *self.style.size()).into_drawing_area();
        root.fill(&rgb(*self.style.background()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.font(40))
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.6f64..(date_count as f64 - 0.4), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(DATE_AXIS_LABEL)
            .y_desc(POSTS_AXIS_LABEL)
            .x_labels(date_count.min(20))
            .y_labels(10)
            .light_line_style(ShapeStyle::from(&rgb(*self.style.grid_color())).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&rgb(*self.style.grid_color())).stroke_width(1))
            .axis_desc_style(self.font(26))
            .label_style(self.font(16))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .y_label_formatter(&|y| format_axis_count(*y))
            .draw()?;

        let slots: Vec<BarSlot> = grouped_bar_slots(counts);

        for (region_idx, region) in counts.regions().iter().enumerate() {
            let color: RGBColor = rgb(self.style.series_color(region_idx));
            let region_slots: Vec<&BarSlot> = slots
                .iter()
                .filter(|slot| slot.region_idx == region_idx)
                .collect();

            chart
                .draw_series(region_slots.iter().map(|slot| {
                    Rectangle::new(
                        [(slot.left, 0.0), (slot.right, slot.value as f64)],
                        color.mix(0.8).filled(),
                    )
                }))?
                .label(region.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));

            chart.draw_series(
                region_slots
                    .iter()
                    .filter(|slot| slot.value > 0)
                    .map(|slot| {
                        Text::new(
                            slot.value.to_string(),
                            ((slot.left + slot.right) / 2.0, slot.value as f64 + offset),
                            self.bottom_centered_font(14),
                        )
                    }),
            )?;
        }

        chart
            .draw_series(LineSeries::new(
                totals
                    .iter()
                    .enumerate()
                    .map(|(i, total)| (i as f64, *total as f64)),
                ShapeStyle::from(&total_color).stroke_width(2),
            ))?
            .label(TOTAL_SERIES_LABEL)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], total_color.stroke_width(2)));

        chart.draw_series(
            totals
                .iter()
                .enumerate()
                .map(|(i, total)| Circle::new((i as f64, *total as f64), 5, total_color.filled())),
        )?;

        chart.draw_series(totals.iter().enumerate().map(|(i, total)| {
            Text::new(
                total.to_string(),
                (i as f64, *total as f64 + offset * 3.0),
                self.bottom_centered_font(16),
            )
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(RGBColor(128, 128, 128))
            .label_font(self.font(18))
            .draw()?;

        root.present()?;

        info!(
            "Daily comparison chart generated successfully ({} posts, dense = {}): {:?}",
            counts.total(),
            counts.dense(),
            output_path
        );

        Ok(())
    }
}
