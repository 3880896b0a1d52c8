use roxmltree::{Document, Node};

use crate::error::TraceError;
use crate::record::{FailingTrace, Record};

/// Parse a JBMC `--xml-ui` document into one [`FailingTrace`] per
/// `result` element with `status="FAILURE"`, in document order.
///
/// Results with any other status are skipped; JBMC emits no `goto_trace`
/// for them. Within a `goto_trace`, `assignment` steps are collected in
/// document order and the `failure` step supplies the reason.
pub fn parse_trace_doc(xml: &str) -> Result<Vec<FailingTrace>, TraceError> {
    let doc = Document::parse(xml).map_err(|e| TraceError::Xml(e.to_string()))?;

    let mut traces = Vec::new();
    for result in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("result"))
    {
        if result.attribute("status") != Some("FAILURE") {
            continue;
        }
        traces.push(parse_goto_trace(result)?);
    }
    Ok(traces)
}

/// Parse the `goto_trace` of one FAILURE result.
fn parse_goto_trace(result: Node<'_, '_>) -> Result<FailingTrace, TraceError> {
    let goto_trace = result
        .children()
        .find(|n| n.has_tag_name("goto_trace"))
        .ok_or(TraceError::MissingElement("goto_trace"))?;

    let mut records = Vec::new();
    let mut reason = None;
    for step in goto_trace.children().filter(Node::is_element) {
        match step.tag_name().name() {
            "assignment" => records.push(parse_assignment(step)?),
            "failure" => {
                reason = Some(
                    step.attribute("reason")
                        .ok_or(TraceError::MissingAttribute("reason"))?
                        .to_string(),
                );
            }
            // Other step kinds (function_call, location-only, ...) carry no
            // value information and are not needed for reconstruction.
            _ => {}
        }
    }

    let reason = reason.ok_or(TraceError::MissingElement("failure"))?;
    Ok(FailingTrace { records, reason })
}

fn parse_assignment(step: Node<'_, '_>) -> Result<Record, TraceError> {
    let base_name = step
        .attribute("base_name")
        .ok_or(TraceError::MissingAttribute("base_name"))?
        .to_string();
    Ok(Record {
        base_name,
        path: child_text(step, "full_lhs")?,
        value: child_text(step, "full_lhs_value")?,
        declared_type: child_text(step, "full_lhs_type")?,
    })
}

/// Trimmed text content of a required child element.
fn child_text(node: Node<'_, '_>, tag: &'static str) -> Result<String, TraceError> {
    let child = node
        .children()
        .find(|n| n.has_tag_name(tag))
        .ok_or(TraceError::MissingElement(tag))?;
    Ok(child.text().unwrap_or("").trim().to_string())
}
