//! Shared fixtures and assertion helpers for integration tests
#![allow(dead_code)]

use outline_extract::Hierarchy;

/// Java source exercising classes, an interface, inheritance, an enum
/// and static/overriding members.
pub const JAVA_SHOWCASE: &str = r#"import java.util.ArrayList;
import java.util.List;

public class Circle {
    private double radius;

    public Circle(double radius) {
        this.radius = radius;
    }

    public double getArea() {
        return Math.PI * radius * radius;
    }

    public static double calculateArea(double radius) {
        return Math.PI * radius * radius;
    }
}

interface Shape {
    double getArea();
}

class Cylinder extends Circle implements Shape {
    private double height;

    public Cylinder(double radius, double height) {
        super(radius);
        this.height = height;
    }

    @Override
    public double getArea() {
        return 2 * Math.PI * getRadius() * height + 2 * super.getArea();
    }

    public double getVolume() {
        return super.getArea() * height;
    }
}

enum Day {
    MONDAY,
    TUESDAY,
    WEDNESDAY,
    THURSDAY,
    FRIDAY,
    SATURDAY,
    SUNDAY;
}

public class Main {
    public static void main(String[] args) {
        Circle circle = new Circle(5);
        System.out.println("Circle area: " + circle.getArea());

        Cylinder cylinder = new Cylinder(5, 10);
        System.out.println("Cylinder volume: " + cylinder.getVolume());

        Day day = Day.MONDAY;
        List<String> list = new ArrayList<>();
        list.add(day.toString());
        for (String s : list) {
            System.out.println(s);
        }
    }
}
"#;

/// Assert that every entity's span is contained in its parent's span
pub fn assert_containment(hierarchy: &Hierarchy) {
    for entity in &hierarchy.entities {
        if let Some(parent_id) = entity.parent {
            let parent = hierarchy.get(parent_id).expect("parent must exist");
            assert!(
                parent.span.contains(&entity.span),
                "span of {} ({:?}) escapes its parent {} ({:?})",
                entity.qualified_name,
                entity.span,
                parent.qualified_name,
                parent.span,
            );
        }
    }
}

/// Assert that entities appear in source order (pre-order traversal)
pub fn assert_source_order(hierarchy: &Hierarchy) {
    for pair in hierarchy.entities.windows(2) {
        assert!(
            pair[0].span.start_byte <= pair[1].span.start_byte,
            "{} and {} are out of source order",
            pair[0].qualified_name,
            pair[1].qualified_name,
        );
    }
}
