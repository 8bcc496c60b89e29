//! Chart Context - Entities

use serde::Serialize;
use serde_json::Value;

use super::{ChartKind, ChartLibrary};

/// x 轴标签旋转角度（度）
pub const LABEL_ROTATION_DEGREES: i32 = 45;

/// 服务端绘制图表的画布描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigureSpec {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
}

/// 各渲染后端自己的图表描述
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "format", content = "body", rename_all = "snake_case")]
pub enum ChartSpec {
    /// ECharts option JSON
    EchartsOption(Value),
    /// Plotly figure JSON（data + layout）
    PlotlyFigure(Value),
    /// 由 plotters 绘制的图
    Figure(FigureSpec),
}

/// 图表对象
///
/// 数据序列与具体后端无关，`spec` 为后端私有的描述
#[derive(Debug, Clone, Serialize)]
pub struct ChartObject {
    pub library: ChartLibrary,
    pub kind: ChartKind,
    pub title: String,
    /// x 轴（词语）
    pub words: Vec<String>,
    /// y 轴（频次）
    pub frequencies: Vec<u32>,
    /// x 轴标签旋转角度，词云为 0
    pub label_rotation: i32,
    pub spec: ChartSpec,
}

impl ChartObject {
    pub fn series_len(&self) -> usize {
        self.words.len()
    }
}

/// 一次渲染构建出的全部图表，按库定义的类型顺序排列
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSet {
    charts: Vec<ChartObject>,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入图表；同类型已存在时替换
    pub fn insert(&mut self, chart: ChartObject) {
        match self.charts.iter_mut().find(|c| c.kind == chart.kind) {
            Some(existing) => *existing = chart,
            None => self.charts.push(chart),
        }
    }

    pub fn get(&self, kind: ChartKind) -> Option<&ChartObject> {
        self.charts.iter().find(|c| c.kind == kind)
    }

    /// 取出选中的图表，其余丢弃
    pub fn take(self, kind: ChartKind) -> Option<ChartObject> {
        self.charts.into_iter().find(|c| c.kind == kind)
    }

    pub fn kinds(&self) -> Vec<ChartKind> {
        self.charts.iter().map(|c| c.kind).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartObject> {
        self.charts.iter()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(kind: ChartKind, title: &str) -> ChartObject {
        ChartObject {
            library: ChartLibrary::Plotly,
            kind,
            title: title.to_string(),
            words: vec!["苹果".to_string()],
            frequencies: vec![5],
            label_rotation: LABEL_ROTATION_DEGREES,
            spec: ChartSpec::PlotlyFigure(Value::Null),
        }
    }

    #[test]
    fn test_insert_replaces_same_kind() {
        let mut set = ChartSet::new();
        set.insert(chart(ChartKind::Bar, "a"));
        set.insert(chart(ChartKind::Line, "b"));
        set.insert(chart(ChartKind::Bar, "c"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.kinds(), vec![ChartKind::Bar, ChartKind::Line]);
        assert_eq!(set.get(ChartKind::Bar).unwrap().title, "c");
    }

    #[test]
    fn test_take_selected_chart() {
        let mut set = ChartSet::new();
        set.insert(chart(ChartKind::Scatter, "散点"));
        assert!(set.clone().take(ChartKind::Bar).is_none());
        assert_eq!(set.take(ChartKind::Scatter).unwrap().title, "散点");
    }

    #[test]
    fn test_spec_serialization_is_tagged() {
        let spec = ChartSpec::Figure(FigureSpec {
            width: 1200,
            height: 600,
            font_family: "SimHei".to_string(),
        });
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["format"], "figure");
        assert_eq!(json["body"]["width"], 1200);
    }
}
