//! Built-in fallbacks used when a project has no `templates/` directory.

pub const SPEC_TEMPLATE: &str = r#"# Feature Specification: [FEATURE NAME]

**Feature Branch**: `[###-feature-name]`
**Created**: [DATE]
**Status**: Draft
**Input**: User description: "$ARGUMENTS"

## User Scenarios & Testing *(mandatory)*

### Primary User Story
[Describe the main user journey in plain language]

### Acceptance Scenarios
1. **Given** [initial state], **When** [action], **Then** [expected outcome]

### Edge Cases
- What happens when [boundary condition]?

## Requirements *(mandatory)*

### Functional Requirements
- **FR-001**: System MUST [specific capability]

### Key Entities *(include if feature involves data)*
- **[Entity 1]**: [What it represents, key attributes without implementation]

## Review & Acceptance Checklist
- [ ] No implementation details (languages, frameworks, APIs)
- [ ] Requirements are testable and unambiguous
- [ ] Success criteria are measurable
"#;

pub const PLAN_TEMPLATE: &str = r#"# Implementation Plan: [FEATURE]

**Branch**: `[###-feature-name]` | **Date**: [DATE] | **Spec**: [link]
**Input**: Feature specification from `/specs/[###-feature-name]/spec.md`

## Summary
[Primary requirement + technical approach from research]

## Technical Context
**Language/Version**: NEEDS CLARIFICATION
**Primary Dependencies**: NEEDS CLARIFICATION
**Storage**: N/A
**Testing**: NEEDS CLARIFICATION
**Target Platform**: NEEDS CLARIFICATION
**Project Type**: single
**Performance Goals**: NEEDS CLARIFICATION
**Constraints**: NEEDS CLARIFICATION

## Project Structure

### Documentation (this feature)
```
specs/[###-feature]/
├── plan.md
├── research.md
├── data-model.md
├── quickstart.md
├── contracts/
└── tasks.md
```

## Phase 0: Outline & Research
## Phase 1: Design & Contracts
## Phase 2: Task Planning Approach

## Progress Tracking
- [ ] Phase 0: Research complete
- [ ] Phase 1: Design complete
- [ ] Phase 2: Task planning complete
"#;

pub const AGENT_FILE_TEMPLATE: &str = r#"# [PROJECT NAME] Development Guidelines

Auto-generated from all feature plans. Last updated: [DATE]

## Active Technologies
[EXTRACTED FROM ALL PLAN.MD FILES]

## Project Structure
```
[ACTUAL STRUCTURE FROM PLANS]
```

## Commands
[ONLY COMMANDS FOR ACTIVE TECHNOLOGIES]

## Code Style
[LANGUAGE-SPECIFIC, ONLY FOR LANGUAGES IN USE]

## Recent Changes
[LAST 3 FEATURES AND WHAT THEY ADDED]

<!-- MANUAL ADDITIONS START -->
<!-- MANUAL ADDITIONS END -->
"#;
