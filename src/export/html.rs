use super::{ExportError, GraphExport};
use serde_json::{Value, json};

const CRITICAL_COLOR: &str = "red";
const NORMAL_COLOR: &str = "lightblue";
const INFO_COLOR: &str = "#fff8dc";

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>PERT/CPM Graph</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>
  #network { width: 100%; height: 600px; border: 1px solid gray; }
</style>
</head>
<body>
"#;

const OPTIONS: &str = r#"{
  layout: {
    hierarchical: {
      direction: 'LR',
      levelSeparation: 150,
      nodeSpacing: 150,
      treeSpacing: 200,
      sortMethod: 'directed'
    }
  },
  nodes: { margin: 8, font: { size: 12, multi: 'html', align: 'center' } },
  edges: { smooth: false, arrows: { to: { enabled: true, scaleFactor: 0.8 } } },
  physics: false,
  interaction: { dragNodes: true }
}"#;

fn vis_nodes(export: &GraphExport) -> Vec<Value> {
    let mut nodes: Vec<Value> = export
        .nodes
        .iter()
        .map(|node| {
            json!({
                "id": node.id,
                "label": node.name,
                "color": if node.critical { CRITICAL_COLOR } else { NORMAL_COLOR },
                "shape": "circle",
            })
        })
        .collect();

    // One info box per activity with its schedule numbers.
    nodes.extend(export.nodes.iter().map(|node| {
        json!({
            "id": format!("info{}", node.id),
            "label": format!(
                "Dur: {} | Slack: {}\nES: {} | EF: {}\nLS: {} | LF: {}",
                node.duration, node.slack, node.es, node.ef, node.ls, node.lf
            ),
            "shape": "box",
            "color": INFO_COLOR,
        })
    }));
    nodes
}

fn vis_edges(export: &GraphExport) -> Vec<Value> {
    let mut edges: Vec<Value> = export
        .edges
        .iter()
        .map(|edge| json!({ "from": edge.from, "to": edge.to, "arrows": "to", "color": "black" }))
        .collect();
    edges.extend(export.nodes.iter().map(|node| {
        json!({
            "from": node.id,
            "to": format!("info{}", node.id),
            "dashes": true,
            "color": "gray",
            "arrows": "",
        })
    }));
    edges
}

/// Renders a standalone vis-network page; critical activities are drawn in red.
pub fn render(export: &GraphExport) -> Result<String, ExportError> {
    let nodes = serde_json::to_string_pretty(&vis_nodes(export))?;
    let edges = serde_json::to_string_pretty(&vis_edges(export))?;
    let title = serde_json::to_string(&export.project_name)?;

    let mut html = String::from(HEADER);
    html.push_str("<h2 id=\"title\"></h2>\n<div id=\"network\"></div>\n<script>\n");
    html.push_str(&format!(
        "document.getElementById('title').textContent = {title} + ' (finish: {})';\n",
        export.project_finish
    ));
    html.push_str(&format!("var nodes = new vis.DataSet({nodes});\n"));
    html.push_str(&format!("var edges = new vis.DataSet({edges});\n"));
    html.push_str("var container = document.getElementById('network');\n");
    html.push_str("var data = { nodes: nodes, edges: edges };\n");
    html.push_str(&format!("var options = {OPTIONS};\n"));
    html.push_str("var network = new vis.Network(container, data, options);\n");
    html.push_str("</script>\n</body>\n</html>\n");
    Ok(html)
}
