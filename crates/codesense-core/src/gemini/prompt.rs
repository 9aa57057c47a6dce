//! Fixed review prompt sent ahead of the submitted code.

/// Instructions and target JSON schema for the review.
pub const CODE_REVIEW_PROMPT: &str = r##"Respond in a JSON format for the following code review task. The model MUST return a structured JSON output with detailed explanations for each section. The output MUST adhere to the following format and include dynamically computed values, findings, and recommendations.

Analyze the following code and provide a detailed review in this exact JSON structure:
{
    "structureAnalysis": {
        "architecture": {
            "score": number,
            "findings": [{
                "aspect": string,
                "evaluation": string,
                "recommendation": string,
                "explanation": string
            }],
            "explanation": string
        },
        "codeQuality": {
            "cyclomaticComplexity": string,
            "documentationScore": number,
            "cohesionScore": number,
            "findings": [],
            "explanation": string
        }
    },
    "implementationReview": {
        "errorHandling": {
            "score": number,
            "issues": [{
                "issue": string,
                "recommendation": string,
                "explanation": string
            }],
            "explanation": string
        },
        "performance": {
            "timeComplexity": string,
            "spaceComplexity": string,
            "bottlenecks": [{
                "function": string,
                "issue": string,
                "recommendation": string,
                "explanation": string
            }],
            "explanation": string
        }
    },
    "bestPractices": {
        "codeStyle": {
            "score": number,
            "violations": [],
            "explanation": string
        },
        "security": {
            "score": number,
            "vulnerabilities": [{
                "issue": string,
                "recommendation": string,
                "explanation": string
            }],
            "explanation": string
        }
    },
    "recommendations": {
        "priority": string,
        "items": [{
            "category": string,
            "title": string,
            "description": string,
            "severity": string,
            "explanation": string
        }],
        "explanation": string
    },
    "metrics": {
        "overallScore": number,
        "qualityScore": number,
        "securityScore": number,
        "performanceScore": number,
        "maintainabilityScore": number,
        "explanation": string
    },
    "corrections": {
        "hasCorrections": boolean,
        "correctedCode": string,
        "changes": [{
            "type": string,
            "location": string,
            "original": string,
            "correction": string,
            "explanation": string
        }],
        "explanation": string
    }
}

If there are code improvements or corrections needed, provide the corrected version of the code in the corrections.correctedCode field, and list all changes made in the corrections.changes array. Include the specific location, original code, correction, and explanation for each change.

Ensure all scores are between 0 and 100, and provide detailed explanations for each section."##;

/// Text sent by the health check.
pub const HEALTH_CHECK_TEXT: &str = "test";

/// Append `code` to the review prompt in a fenced block.
pub fn build_review_prompt(code: &str) -> String {
    format!("{}\n\nCode to analyze:\n```\n{}\n```", CODE_REVIEW_PROMPT, code)
}
