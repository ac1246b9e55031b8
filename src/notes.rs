//! Release Notes Rendering
//!
//! Builds the Markdown release notes from per-region layer results. Rendering
//! performs no I/O and produces identical output for identical inputs.

use crate::config::ReleaseConfig;
use crate::regions::PREFERRED_REGION;
use crate::resolver::{ContinentGroups, RegionResult};

/// Exporter name set in `OTEL_TRACES_EXPORTER`
const TRACES_EXPORTER: &str = "otlpstdout";

/// CloudFormation layer entry used when no ARN was resolved anywhere
const PLACEHOLDER_LAYER: &str =
    r#"!Sub "arn:aws:lambda:${AWS::Region}:YOUR_ACCOUNT:layer:LAYER_NAME:VERSION""#;

/// ARN used in the CloudFormation example.
///
/// Prefers [`PREFERRED_REGION`], then the first resolved ARN in table order.
pub fn example_arn(groups: &ContinentGroups) -> Option<&str> {
    groups
        .get(PREFERRED_REGION)
        .and_then(RegionResult::arn)
        .or_else(|| {
            groups
                .iter()
                .flat_map(|(_, regions)| regions.values())
                .find_map(RegionResult::arn)
        })
}

/// Render the full release notes document
pub fn render(release: &ReleaseConfig, groups: &ContinentGroups) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_header(&mut lines, release);
    push_region_tables(&mut lines, release, groups);
    push_usage(&mut lines, release, example_arn(groups));

    lines.join("\n")
}

fn push_header(lines: &mut Vec<String>, release: &ReleaseConfig) {
    let language = release.language;

    lines.extend([
        format!(
            "## Release Details for {} - Upstream {}",
            language, release.upstream_version
        ),
        String::new(),
        "### Distribution Description".to_string(),
        format!("> OpenTelemetry Lambda Layer for {language} with OTLP stdout exporter"),
        "> ".to_string(),
        "> This layer provides automatic OpenTelemetry instrumentation for Lambda functions, \
         sending traces to stdout in OTLP format for further processing by log-based telemetry \
         systems."
            .to_string(),
        String::new(),
        "### Build Details".to_string(),
        format!(
            "- **Upstream OpenTelemetry Lambda**: {}",
            release.upstream_version
        ),
        format!(
            "- **OTLP Stdout Exporter Version**: {}",
            release.exporter_version
        ),
        format!("- **Release Group**: {}", release.release_group),
        format!("- **Runtime**: {}", language.runtime()),
        String::new(),
        "<details><summary>".to_string(),
        String::new(),
        "### Layer ARNs by Region (click to expand)".to_string(),
        String::new(),
        "</summary>".to_string(),
        String::new(),
    ]);
}

fn push_region_tables(lines: &mut Vec<String>, release: &ReleaseConfig, groups: &ContinentGroups) {
    for (continent, regions) in groups.iter() {
        lines.push("<table>".to_string());
        lines.push(format!(
            r#"<tr><td colspan="2"><strong>{continent}</strong></td></tr>"#
        ));

        for (region, result) in regions {
            let marker = if result.arn().is_some() { "✅" } else { "❌" };
            // shields.io treats a single dash as a field separator
            let badge_name = region.replace('-', "--");

            lines.push(format!(
                r#"<tr><td colspan="2">{marker} <strong>{}</strong></td></tr>"#,
                result.display_name
            ));
            lines.push("<tr>".to_string());
            lines.push(format!(
                r#"<td><img src="https://img.shields.io/badge/{}-{badge_name}-eee?style=for-the-badge" alt="{region}"></td>"#,
                release.language
            ));

            match result.arn() {
                Some(arn) => lines.push(format!("<td><code>{arn}</code></td>")),
                None => lines.push("<td>❌ Layer not found or failed to publish</td>".to_string()),
            }

            lines.push("</tr>".to_string());
        }

        lines.push("</table>".to_string());
        lines.push(String::new());
    }
}

fn push_usage(lines: &mut Vec<String>, release: &ReleaseConfig, example_arn: Option<&str>) {
    let wrapper = release.language.exec_wrapper();

    lines.extend([
        String::new(),
        "</details>".to_string(),
        String::new(),
        "### Usage Instructions".to_string(),
        String::new(),
        "1. **Add the layer** to your Lambda function using one of the ARNs above".to_string(),
        "2. **Set environment variables**:".to_string(),
        format!("   - `AWS_LAMBDA_EXEC_WRAPPER={wrapper}`"),
        format!("   - `OTEL_TRACES_EXPORTER={TRACES_EXPORTER}`"),
        "3. **Configure your runtime** to process stdout logs containing OTLP trace data"
            .to_string(),
        String::new(),
        "### Example CloudFormation".to_string(),
        String::new(),
        "```yaml".to_string(),
        "MyLambdaFunction:".to_string(),
        "  Type: AWS::Lambda::Function".to_string(),
        "  Properties:".to_string(),
        "    Layers:".to_string(),
    ]);

    match example_arn {
        Some(arn) => lines.push(format!(r#"      - "{arn}""#)),
        None => lines.push(format!("      - {PLACEHOLDER_LAYER}")),
    }

    lines.extend([
        "    Environment:".to_string(),
        "      Variables:".to_string(),
        format!("        AWS_LAMBDA_EXEC_WRAPPER: {wrapper}"),
        format!("        OTEL_TRACES_EXPORTER: {TRACES_EXPORTER}"),
        "```".to_string(),
        String::new(),
    ]);

    let note = if example_arn.is_some() {
        "> **Note**: The example above uses a specific ARN. For other regions, use the \
         corresponding ARN from the table above."
    } else {
        "> **Note**: Replace `YOUR_ACCOUNT`, `LAYER_NAME`, and `VERSION` with the appropriate \
         values from the ARNs above."
    };
    lines.push(note.to_string());
    lines.push(String::new());
}
