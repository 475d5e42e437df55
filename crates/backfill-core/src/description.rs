use crate::catalog;
use crate::types::{PhaseLabel, PillarLabel};

/// Render the templated markdown body for a pillar issue.
///
/// Pure and deterministic. Returns `None` when the phase or pillar does not
/// resolve in the catalog; callers treat `None` as "skip".
pub fn render(title: &str, phase: PhaseLabel, pillar: PillarLabel) -> Option<String> {
    let info = catalog::phase_info(phase)?;
    let pillar_name = catalog::pillar_name(phase, pillar)?;
    let chain = catalog::dependency_chain(phase, pillar)?;
    let overview = catalog::overview_issue(phase)?;

    let feature = feature_name(title);
    let phase_num = phase.number();

    Some(format!(
        r#"## 🎯 {feature}

**Phase:** {phase} - {pillar_name}
**Version:** {version}
**Objective:** {objective}

### 📋 Feature Description

Implement {feature_lower} to support {objective_lower}.

### ✅ Deliverables

- [ ] Core functionality implemented
- [ ] TypeScript types defined
- [ ] Unit tests (80%+ coverage)
- [ ] Integration tests
- [ ] API documentation
- [ ] Component/function documentation
- [ ] Error handling & validation
- [ ] Performance optimized
- [ ] Accessibility checked (WCAG AA)
- [ ] Reviewed & approved

### 🔗 Dependencies

{dep_first} → {dep_second} → {dep_third}

```mermaid
graph LR
    A["Phase {phase_num} Start"] --> B["{dep_first}"]
    B --> C["{dep_second}"]
    C --> D["{feature}"]
    D --> E["Phase Complete"]
```

### 📊 Success Criteria

- [ ] Feature matches design specifications
- [ ] All tests passing
- [ ] No TypeScript errors
- [ ] Lighthouse performance > 85
- [ ] No critical security vulnerabilities
- [ ] Code reviewed by team lead
- [ ] Documentation complete
- [ ] Ready for staging deployment

### 🚀 Implementation Notes

- Follow VLN brand guidelines (CLAUDE.md)
- Use Tailwind CSS for styling
- Prefer server components by default
- Add ARIA labels for accessibility
- Include proper error boundaries
- Add loading/skeleton states

### 📚 Related Issues

- **Phase {phase_num} Overview:** #{overview}
- **Phase Tracking:** https://github.com/Fused-Gaming/vln/docs/planning/PHASE_TRACKING.md

---

**Estimate:** TBD (adjust in project)
**Priority:** Medium (adjust based on sprint planning)
"#,
        feature = feature,
        phase = phase,
        pillar_name = pillar_name,
        version = info.version,
        objective = info.objective,
        feature_lower = feature.to_lowercase(),
        objective_lower = info.objective.to_lowercase(),
        dep_first = chain[0],
        dep_second = chain[1],
        dep_third = chain[2],
        phase_num = phase_num,
        overview = overview,
    ))
}

/// The human-readable feature name: text after the last colon in the title,
/// or the whole title when no colon (or nothing after it) is present.
fn feature_name(title: &str) -> &str {
    match title.rsplit_once(':') {
        Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
        _ => title.trim(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
