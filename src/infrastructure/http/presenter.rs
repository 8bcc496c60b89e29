//! Presenter - 分析页面
//!
//! 侧栏为配置表单，任一控件变化即以 GET 提交并重新执行整条流水线。
//! 主区域依次为页面内提示、Top 20 词频表、选中的图表

use askama::Template;
use html_escape::encode_text;

use crate::application::{AnalysisReport, Notice, MIN_FREQ_RANGE};
use crate::domain::{ChartLibrary, WordCount};

pub const PAGE_TITLE: &str = "文本分析可视化工具";

const STYLE: &str = "\
body{margin:0;display:flex;font-family:sans-serif;color:#262730}\
aside{width:300px;min-height:100vh;padding:24px;background:#f0f2f6;box-sizing:border-box}\
aside label{display:block;margin:16px 0 4px;font-size:14px}\
aside input[type=text],aside select{width:100%;padding:6px;box-sizing:border-box}\
aside input[type=range]{width:100%}\
main{flex:1;padding:24px 48px;min-width:0}\
.error{padding:12px 16px;margin:12px 0;border-radius:6px;background:#ffe4e4;color:#9b1c1c}\
table{border-collapse:collapse;min-width:320px}\
th,td{padding:6px 16px;border-bottom:1px solid #e6e9ef;text-align:left}\
td.count{text-align:right}\
pre{padding:12px;background:#f6f8fa;overflow:auto;font-size:12px}";

/// 下拉框选项
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
<style>{{ style|safe }}</style>
</head>
<body>
<aside>
<h2>配置</h2>
<form method="get" action="/">
<label for="url">输入文章URL</label>
<input type="text" id="url" name="url" value="{{ url }}" onchange="this.form.submit()">
<label for="min_freq">最小词频: <output id="min_freq_value">{{ min_freq }}</output></label>
<input type="range" id="min_freq" name="min_freq" min="{{ min }}" max="{{ max }}" step="1" value="{{ min_freq }}" oninput="document.getElementById('min_freq_value').value=this.value" onchange="this.form.submit()">
<label for="library">选择可视化库</label>
<select id="library" name="library" onchange="this.form.submit()">
{% for option in libraries %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
{% endfor %}</select>
<label for="chart_kind">选择图表类型</label>
<select id="chart_kind" name="chart_kind" onchange="this.form.submit()">
{% for option in kinds %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
{% endfor %}</select>
<noscript><button type="submit">提交</button></noscript>
</form>
</aside>
<main>
<h1>{{ title }}</h1>
{% for notice in notices %}<div class="error">{{ notice.message }}</div>
{% endfor %}
{% if !table.is_empty() %}<section>
<h2>词频统计 (Top 20)</h2>
<table>
<thead><tr><th>词语</th><th>频次</th></tr></thead>
<tbody>
{% for row in table %}<tr><td>{{ row.word }}</td><td class="count">{{ row.count }}</td></tr>
{% endfor %}</tbody>
</table>
</section>{% endif %}
{% if has_chart %}<section>
<h2>可视化图表 - {{ chart_label }}</h2>
{% if !chart_html.is_empty() %}{{ chart_html|safe }}{% else if !render_error.is_empty() %}<div class="error">{{ render_error }}</div>
{% if !render_detail.is_empty() %}<p>Debug info:</p><pre>{{ render_detail }}</pre>{% endif %}{% endif %}
</section>{% endif %}
</main>
</body>
</html>"#,
    ext = "html"
)]
struct PageTemplate<'a> {
    title: &'static str,
    style: &'static str,
    url: &'a str,
    min_freq: u32,
    min: u32,
    max: u32,
    libraries: Vec<SelectOption>,
    kinds: Vec<SelectOption>,
    notices: &'a [Notice],
    table: &'a [WordCount],
    has_chart: bool,
    chart_label: &'static str,
    /// 渲染成功时的图表片段，原样嵌入
    chart_html: &'a str,
    render_error: &'a str,
    render_detail: &'a str,
}

/// 渲染完整页面
///
/// `libraries` 为可选的可视化库，当前选中的库和图表类型取自报告
pub fn render_page(
    report: &AnalysisReport,
    libraries: &[ChartLibrary],
) -> Result<String, askama::Error> {
    let libraries = libraries
        .iter()
        .map(|library| SelectOption {
            value: library.as_str(),
            label: library.display_name(),
            selected: *library == report.library,
        })
        .collect();

    let kinds = report
        .library
        .chart_kinds()
        .iter()
        .map(|kind| SelectOption {
            value: kind.as_str(),
            label: kind.label(),
            selected: *kind == report.chart_kind,
        })
        .collect();

    let render_error = report.render_error.as_ref();

    PageTemplate {
        title: PAGE_TITLE,
        style: STYLE,
        url: &report.url,
        min_freq: report.min_freq,
        min: *MIN_FREQ_RANGE.start(),
        max: *MIN_FREQ_RANGE.end(),
        libraries,
        kinds,
        notices: &report.notices,
        table: &report.table,
        has_chart: report.chart.is_some(),
        chart_label: report.chart.as_ref().map_or("", |chart| chart.kind.label()),
        chart_html: report.rendered.as_ref().map_or("", |r| r.html.as_str()),
        render_error: render_error.map_or("", |notice| notice.message.as_str()),
        render_detail: render_error
            .and_then(|notice| notice.detail.as_deref())
            .unwrap_or(""),
    }
    .render()
}

/// 模板渲染失败时的最小页面
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"zh-CN\"><head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body><div class=\"error\">{}</div></body></html>",
        PAGE_TITLE,
        encode_text(message)
    )
}
