use super::{FromNode, Multisection, Node, Section};

/// Split a path on `/`, dropping empty segments.
///
/// Leading, trailing and repeated slashes therefore do not matter.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

pub(crate) fn resolve<T: FromNode>(section: &Section, segments: &[&str]) -> Option<T> {
    let (head, rest) = segments.split_first()?;
    let node = section.node(head)?;

    if rest.is_empty() {
        return T::from_node(node);
    }

    match node {
        Node::Section(child) => resolve(child, rest),
        Node::Multisection(multi) => {
            let (title, rest) = rest.split_first()?;
            let instance = multi.instance(title)?;
            if rest.is_empty() {
                T::from_instance(instance)
            } else {
                resolve(&instance, rest)
            }
        }
        _ => None,
    }
}

/// Run `f` on the multisection at the end of `segments`.
pub(crate) fn with_multisection<R>(
    section: &Section,
    segments: &[&str],
    f: impl FnOnce(&Multisection) -> R,
) -> Option<R> {
    let (last, parents) = segments.split_last()?;
    if parents.is_empty() {
        return section.multisection(last).map(f);
    }

    let parent: Section = resolve(section, parents)?;
    parent.multisection(last).map(f)
}
