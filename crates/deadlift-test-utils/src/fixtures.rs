//! URDF robot fixtures shared across crate test suites.
//!
//! All arms are built so that at the zero configuration every link frame is
//! axis-aligned with the base frame, which keeps gravity torques easy to
//! compute by hand: each pitch joint holds `g · Σ mᵢ·xᵢ` where `xᵢ` is the
//! horizontal lever arm to mass `i`.

/// One revolute pitch joint (axis +Y) swinging a boom whose center of mass
/// sits 0.5 m out along +X. Holding it horizontal takes
/// `|τ| = 1.5 · g · 0.5` Nm.
pub const SINGLE_PENDULUM: &str = r#"
    <robot name="single_pendulum">
        <link name="base">
            <inertial>
                <mass value="10.0"/>
                <inertia ixx="0.1" ixy="0" ixz="0" iyy="0.1" iyz="0" izz="0.1"/>
            </inertial>
        </link>
        <link name="boom">
            <inertial>
                <origin xyz="0.5 0 0" rpy="0 0 0"/>
                <mass value="1.5"/>
                <inertia ixx="0.001" ixy="0" ixz="0" iyy="0.01" iyz="0" izz="0.01"/>
            </inertial>
        </link>
        <joint name="pivot" type="revolute">
            <parent link="base"/>
            <child link="boom"/>
            <origin xyz="0 0 0.3" rpy="0 0 0"/>
            <axis xyz="0 1 0"/>
            <limit lower="-2.0" upper="2.0" effort="40" velocity="3"/>
        </joint>
    </robot>
"#;

/// Planar 3-DOF arm reaching along +X at the zero configuration:
///
/// ```text
/// base ──pivot(Y)── link1 ──pivot(Y)── link2 ──roll(Z)── wrist ──fixed── tool
///        shoulder   0.4 m    elbow     0.3 m  wrist_roll 0.05m
/// ```
///
/// Horizontal lever arms from the shoulder at zero: link1 COM 0.2, link2
/// COM 0.55, wrist COM 0.72, tool COM 0.8, tip frame 0.75. The wrist roll
/// axis is vertical, so gravity and a vertical tip force put no torque on
/// it at all.
pub const PLANAR_ARM: &str = r#"
    <robot name="planar_arm">
        <link name="base">
            <inertial>
                <mass value="20.0"/>
                <inertia ixx="0.5" ixy="0" ixz="0" iyy="0.5" iyz="0" izz="0.5"/>
            </inertial>
        </link>
        <link name="link1">
            <inertial>
                <origin xyz="0.2 0 0" rpy="0 0 0"/>
                <mass value="2.0"/>
                <inertia ixx="0.002" ixy="0" ixz="0" iyy="0.03" iyz="0" izz="0.03"/>
            </inertial>
        </link>
        <link name="link2">
            <inertial>
                <origin xyz="0.15 0 0" rpy="0 0 0"/>
                <mass value="1.0"/>
                <inertia ixx="0.001" ixy="0" ixz="0" iyy="0.008" iyz="0" izz="0.008"/>
            </inertial>
        </link>
        <link name="wrist">
            <inertial>
                <origin xyz="0.02 0 0" rpy="0 0 0"/>
                <mass value="0.3"/>
                <inertia ixx="0.0004" ixy="0" ixz="0" iyy="0.0004" iyz="0" izz="0.0003"/>
            </inertial>
        </link>
        <link name="tool">
            <inertial>
                <origin xyz="0.05 0 0" rpy="0 0 0"/>
                <mass value="0.5"/>
                <inertia ixx="0.0002" ixy="0" ixz="0" iyy="0.0005" iyz="0" izz="0.0005"/>
            </inertial>
        </link>
        <joint name="shoulder" type="revolute">
            <parent link="base"/>
            <child link="link1"/>
            <origin xyz="0 0 0.1" rpy="0 0 0"/>
            <axis xyz="0 1 0"/>
            <limit lower="-2.6" upper="2.6" effort="60" velocity="3"/>
        </joint>
        <joint name="elbow" type="revolute">
            <parent link="link1"/>
            <child link="link2"/>
            <origin xyz="0.4 0 0" rpy="0 0 0"/>
            <axis xyz="0 1 0"/>
            <limit lower="-2.4" upper="2.4" effort="30" velocity="5"/>
        </joint>
        <joint name="wrist_roll" type="revolute">
            <parent link="link2"/>
            <child link="wrist"/>
            <origin xyz="0.3 0 0" rpy="0 0 0"/>
            <axis xyz="0 0 1"/>
            <limit lower="-3.1" upper="3.1" effort="10" velocity="8"/>
        </joint>
        <joint name="tool_mount" type="fixed">
            <parent link="wrist"/>
            <child link="tool"/>
            <origin xyz="0.05 0 0" rpy="0 0 0"/>
        </joint>
    </robot>
"#;

/// Vertical mast: a fixed riser, one prismatic lift along +Z, and a hook
/// hanging below the carriage through a fixed mount. Holding the carriage
/// still takes a lift force of `(5 + 1) · g` N regardless of COM placement.
pub const PRISMATIC_MAST: &str = r#"
    <robot name="prismatic_mast">
        <link name="base"/>
        <link name="mast"/>
        <link name="carriage">
            <inertial>
                <origin xyz="0 0 0.1" rpy="0 0 0"/>
                <mass value="5.0"/>
                <inertia ixx="0.05" ixy="0" ixz="0" iyy="0.05" iyz="0" izz="0.02"/>
            </inertial>
        </link>
        <link name="hook">
            <inertial>
                <origin xyz="0 0 -0.05" rpy="0 0 0"/>
                <mass value="1.0"/>
                <inertia ixx="0.001" ixy="0" ixz="0" iyy="0.001" iyz="0" izz="0.001"/>
            </inertial>
        </link>
        <joint name="riser" type="fixed">
            <parent link="base"/>
            <child link="mast"/>
            <origin xyz="0 0 0.5" rpy="0 0 0"/>
        </joint>
        <joint name="lift" type="prismatic">
            <parent link="mast"/>
            <child link="carriage"/>
            <origin xyz="0 0 0.2" rpy="0 0 0"/>
            <axis xyz="0 0 1"/>
            <limit lower="0.0" upper="1.2" effort="400" velocity="0.5"/>
        </joint>
        <joint name="hook_mount" type="fixed">
            <parent link="carriage"/>
            <child link="hook"/>
            <origin xyz="0 0 -0.2" rpy="0 0 0"/>
        </joint>
    </robot>
"#;

/// A torso with two shoulder joints hanging off the same link. Listing
/// both shoulders in one group is not a serial chain.
pub const BRANCHING_ARM: &str = r#"
    <robot name="branching_arm">
        <link name="base"/>
        <link name="torso">
            <inertial>
                <mass value="8.0"/>
                <inertia ixx="0.2" ixy="0" ixz="0" iyy="0.2" iyz="0" izz="0.1"/>
            </inertial>
        </link>
        <link name="left_arm">
            <inertial>
                <origin xyz="0.1 0 0" rpy="0 0 0"/>
                <mass value="1.0"/>
                <inertia ixx="0.002" ixy="0" ixz="0" iyy="0.002" iyz="0" izz="0.002"/>
            </inertial>
        </link>
        <link name="right_arm">
            <inertial>
                <origin xyz="-0.1 0 0" rpy="0 0 0"/>
                <mass value="1.0"/>
                <inertia ixx="0.002" ixy="0" ixz="0" iyy="0.002" iyz="0" izz="0.002"/>
            </inertial>
        </link>
        <joint name="waist" type="revolute">
            <parent link="base"/>
            <child link="torso"/>
            <origin xyz="0 0 0.4" rpy="0 0 0"/>
            <axis xyz="0 0 1"/>
            <limit lower="-3.1" upper="3.1" effort="80" velocity="2"/>
        </joint>
        <joint name="left_shoulder" type="revolute">
            <parent link="torso"/>
            <child link="left_arm"/>
            <origin xyz="0 0.2 0.2" rpy="0 0 0"/>
            <axis xyz="0 1 0"/>
            <limit lower="-1.5" upper="1.5" effort="40" velocity="3"/>
        </joint>
        <joint name="right_shoulder" type="revolute">
            <parent link="torso"/>
            <child link="right_arm"/>
            <origin xyz="0 -0.2 0.2" rpy="0 0 0"/>
            <axis xyz="0 1 0"/>
            <limit lower="-1.5" upper="1.5" effort="40" velocity="3"/>
        </joint>
    </robot>
"#;
